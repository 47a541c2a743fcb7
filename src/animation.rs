use crate::{
    config::SceneConfig,
    constants::CAMERA_Z,
    layout::{Pivot, Placement},
};
use std::f64::consts::TAU;
use three_d::{Mat4, radians, vec3};

/// rem_euclid can round up to exactly 2π for tiny negative inputs.
fn wrap(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a }
}

/// Rotation state of the whole scene. Angles are in radians, grow by a fixed step per frame
/// and stay wrapped into [0, 2π) so the step size holds however long the loop runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub clockwise_angle: f64,
    pub counterclockwise_angle: f64,
    /// Every object spins the same amount around its own x and y axes.
    pub spin_angle: f64,
    pub camera_z: f64,
    pub frame: u64,

    clockwise_step: f64,
    counterclockwise_step: f64,
    spin_step: f64,
    dolly: f64,
}

impl AnimationState {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            clockwise_angle: 0.0,
            counterclockwise_angle: 0.0,
            spin_angle: 0.0,
            camera_z: CAMERA_Z as f64,
            frame: 0,
            clockwise_step: config.clockwise_step as f64,
            counterclockwise_step: config.counterclockwise_step as f64,
            spin_step: config.spin_step as f64,
            dolly: config.dolly as f64,
        }
    }

    /// One frame worth of motion.
    pub fn advance(&mut self) {
        self.clockwise_angle = wrap(self.clockwise_angle + self.clockwise_step);
        self.counterclockwise_angle = wrap(self.counterclockwise_angle + self.counterclockwise_step);
        self.spin_angle = wrap(self.spin_angle + self.spin_step);
        self.camera_z -= self.dolly;
        self.frame += 1;
    }

    /// Whether the camera moves from frame to frame.
    pub fn is_dollying(&self) -> bool {
        self.dolly != 0.0
    }

    pub fn pivot_angle(&self, pivot: Pivot) -> f64 {
        match pivot {
            Pivot::Clockwise => self.clockwise_angle,
            Pivot::CounterClockwise => self.counterclockwise_angle,
        }
    }

    pub fn pivot_transform(&self, pivot: Pivot) -> Mat4 {
        Mat4::from_angle_z(radians(self.pivot_angle(pivot) as f32))
    }

    /// Object to world: spin about x then y (XYZ euler order), move into place,
    /// then swing around the pivot.
    pub fn world_transform(&self, placement: &Placement) -> Mat4 {
        let p = placement.position;
        let spin = self.spin_angle as f32;
        let local = Mat4::from_translation(vec3(p.x, p.y, p.z))
            * Mat4::from_angle_x(radians(spin))
            * Mat4::from_angle_y(radians(spin));

        self.pivot_transform(placement.pivot) * local
    }
}
