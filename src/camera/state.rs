use nalgebra_glm as glm;

use super::{
    DEFAULT_FOV_Y, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW, FOV_Y_MAX,
    FOV_Y_MIN, MoveDirection, PITCH_LIMIT,
};
use crate::pose::CameraPose;
use crate::settings::CameraSettings;

/// Free-fly camera: a position plus two Euler angles, with the orthonormal
/// front/right/up basis derived from them.
///
/// The basis is recomputed after every yaw/pitch mutation and is never
/// settable on its own, so it always agrees with the stored angles.
#[derive(Debug, Clone)]
pub struct CameraState {
    position: glm::Vec3,
    front: glm::Vec3,
    up: glm::Vec3,
    right: glm::Vec3,
    world_up: glm::Vec3,
    yaw: f32,
    pitch: f32,
    /// Vertical field of view in degrees, kept within [FOV_Y_MIN, FOV_Y_MAX].
    fov_y: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    default_position: glm::Vec3,
    default_yaw: f32,
    default_pitch: f32,
    default_fov_y: f32,
}

impl CameraState {
    pub fn new(position: glm::Vec3, world_up: glm::Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: glm::vec3(0.0, 0.0, -1.0),
            up: world_up,
            right: glm::vec3(1.0, 0.0, 0.0),
            world_up,
            yaw,
            pitch,
            fov_y: DEFAULT_FOV_Y,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            default_position: position,
            default_yaw: yaw,
            default_pitch: pitch,
            default_fov_y: DEFAULT_FOV_Y,
        };
        camera.update_basis();
        camera
    }

    /// Camera at `position` with tunables taken from `settings`.
    pub fn with_settings(position: glm::Vec3, settings: &CameraSettings) -> Self {
        let world_up = glm::vec3(
            settings.world_up[0],
            settings.world_up[1],
            settings.world_up[2],
        );
        let mut camera = Self::new(position, world_up, DEFAULT_YAW, DEFAULT_PITCH);
        camera.movement_speed = settings.movement_speed;
        camera.mouse_sensitivity = settings.mouse_sensitivity;
        camera.fov_y = settings.fov_y_degrees.clamp(FOV_Y_MIN, FOV_Y_MAX);
        camera.default_fov_y = camera.fov_y;
        camera
    }

    /// Move along the current basis. Position only, so no basis recompute.
    pub fn apply_movement(&mut self, direction: MoveDirection, elapsed_seconds: f32) {
        let velocity = self.movement_speed * elapsed_seconds;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Rotate by a pixel-space look delta, scaled by the mouse sensitivity.
    ///
    /// With `constrain_pitch` the stored pitch is clamped to
    /// [-PITCH_LIMIT, PITCH_LIMIT] so the basis never degenerates at the poles.
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// Scroll-wheel zoom: narrows or widens the vertical field of view.
    pub fn apply_zoom_delta(&mut self, dy: f32) {
        self.fov_y = (self.fov_y - dy).clamp(FOV_Y_MIN, FOV_Y_MAX);
    }

    /// Right-handed look-at transform for the current pose.
    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y
    }

    pub fn position(&self) -> glm::Vec3 {
        self.position
    }

    pub fn front(&self) -> glm::Vec3 {
        self.front
    }

    pub fn right(&self) -> glm::Vec3 {
        self.right
    }

    pub fn up(&self) -> glm::Vec3 {
        self.up
    }

    pub fn world_up(&self) -> glm::Vec3 {
        self.world_up
    }

    /// Current (yaw, pitch) in degrees.
    pub fn orientation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    /// Snapshot of the restorable part of the camera.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: [self.position.x, self.position.y, self.position.z],
            yaw: self.yaw,
            pitch: self.pitch,
            fov_y_degrees: self.fov_y,
        }
    }

    /// Restore a previously captured pose. Pose files are untrusted input, so
    /// pitch and field of view are clamped back into range.
    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.position = glm::vec3(pose.position[0], pose.position[1], pose.position[2]);
        self.yaw = pose.yaw;
        self.pitch = pose.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.fov_y = pose.fov_y_degrees.clamp(FOV_Y_MIN, FOV_Y_MAX);
        self.update_basis();
    }

    /// Back to the construction-time pose.
    pub fn reset(&mut self) {
        self.position = self.default_position;
        self.yaw = self.default_yaw;
        self.pitch = self.default_pitch;
        self.fov_y = self.default_fov_y;
        self.update_basis();
    }

    /// Recompute front/right/up from yaw/pitch. The order matters: right is
    /// front x world_up, so front must be up to date first.
    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let front = glm::vec3(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = glm::normalize(&front);
        self.right = glm::normalize(&glm::cross(&self.front, &self.world_up));
        self.up = glm::normalize(&glm::cross(&self.right, &self.front));
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        )
    }
}
