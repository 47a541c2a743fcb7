pub const OBJECT_COUNT: usize = 240;
pub const PALETTE_SIZE: usize = 10;

/// Full width of the scatter box; positions are `(random - 0.5) * extent`.
pub const SCATTER_EXTENT: [f32; 3] = [40.0, 40.0, 70.0];

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 30.0;

pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
/// The directional light sits here and points at the origin.
pub const DIRECTIONAL_POSITION: [f32; 3] = [70.0, 0.0, 50.0];

// per-frame increments, radians
pub const CLOCKWISE_PIVOT_STEP: f32 = -0.002;
pub const COUNTERCLOCKWISE_PIVOT_STEP: f32 = 0.001;
pub const OBJECT_SPIN_STEP: f32 = 0.01;

pub const MAX_PIXEL_RATIO: f32 = 2.0;

pub const DOUBLE_CLICK_MS: f64 = 500.0;
pub const DOUBLE_CLICK_TRAVEL_PX: f32 = 4.0;

pub const WINDOW_TITLE: &str = "polydrift";
