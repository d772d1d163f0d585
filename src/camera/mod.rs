// Camera module: orientation state plus the input session around it.

mod controller;
mod state;

pub use controller::CameraController;
pub use state::CameraState;

/// Default yaw in degrees. A yaw of 0 points the front vector down +X, so the
/// camera starts rotated to look down -Z.
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_FOV_Y: f32 = 45.0;

/// Pitch is kept strictly short of +-90 so the front vector never lines up
/// with the world up axis (the right vector is front x world_up).
pub const PITCH_LIMIT: f32 = 89.0;

pub const FOV_Y_MIN: f32 = 1.0;
pub const FOV_Y_MAX: f32 = 45.0;

/// Movement command for one frame of held input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];
}
