use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, MAX_PIXEL_RATIO};
use log::info;
use three_d::{Camera, Viewport, degrees, vec3};

/// Tracks the window viewport and the perspective camera looking down -z at the origin.
#[derive(Debug)]
pub struct ViewportState {
    pub viewport: Viewport,
    pub device_pixel_ratio: f32,
}

impl ViewportState {
    pub fn new(viewport: Viewport, device_pixel_ratio: f32) -> Self {
        Self {
            viewport,
            device_pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.width as f32 / self.viewport.height.max(1) as f32
    }

    /// Device pixel ratio capped at 2. Only reported: three-d sizes the framebuffer itself.
    pub fn effective_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Call once per frame. Returns true if the window was resized or moved to a
    /// display with a different pixel ratio.
    pub fn update(&mut self, viewport: Viewport, device_pixel_ratio: f32) -> bool {
        let resized = viewport != self.viewport;
        let ratio_changed = device_pixel_ratio != self.device_pixel_ratio;

        if resized {
            info!(
                "Resized to {}x{} (aspect {:.3})",
                viewport.width,
                viewport.height,
                viewport.width as f32 / viewport.height.max(1) as f32
            );
            self.viewport = viewport;
        }
        if ratio_changed {
            self.device_pixel_ratio = device_pixel_ratio;
            info!(
                "Pixel ratio is now {} (effective {})",
                device_pixel_ratio,
                self.effective_pixel_ratio()
            );
        }

        resized || ratio_changed
    }

    pub fn camera(&self, camera_z: f32) -> Camera {
        Camera::new_perspective(
            self.viewport,
            vec3(0.0, 0.0, camera_z),
            vec3(0.0, 0.0, camera_z - 1.0),
            vec3(0.0, 1.0, 0.0),
            degrees(CAMERA_FOV_DEGREES),
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    /// Keeps an existing camera in sync with the viewport and the dolly position.
    pub fn sync_camera(&self, camera: &mut Camera, camera_z: f32) {
        camera.set_viewport(self.viewport);
        camera.set_view(
            vec3(0.0, 0.0, camera_z),
            vec3(0.0, 0.0, camera_z - 1.0),
            vec3(0.0, 1.0, 0.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_pixel_ratio_cap() {
        let state = ViewportState::new(viewport(800, 600), 3.0);
        assert_eq!(state.effective_pixel_ratio(), 2.0);

        let state = ViewportState::new(viewport(800, 600), 1.5);
        assert_eq!(state.effective_pixel_ratio(), 1.5);
    }

    #[test]
    fn test_update_reports_changes() {
        let mut state = ViewportState::new(viewport(800, 600), 1.0);
        assert!(!state.update(viewport(800, 600), 1.0));

        assert!(state.update(viewport(1920, 1080), 1.0));
        assert!((state.aspect() - 16.0 / 9.0).abs() < 1e-6);

        // monitor change without resize
        assert!(state.update(viewport(1920, 1080), 2.5));
        assert_eq!(state.effective_pixel_ratio(), 2.0);
    }

    #[test]
    fn test_sync_camera_follows_resize_and_dolly() {
        let mut state = ViewportState::new(viewport(800, 600), 1.0);
        let mut camera = state.camera(30.0);

        assert!(state.update(viewport(1920, 1080), 1.0));
        state.sync_camera(&mut camera, 29.5);

        assert_eq!(camera.viewport(), viewport(1920, 1080));
        assert_eq!(camera.position().z, 29.5);
    }

    #[test]
    fn test_zero_height_aspect() {
        let state = ViewportState::new(viewport(800, 0), 1.0);
        assert_eq!(state.aspect(), 800.0);
    }
}
