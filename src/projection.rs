use nalgebra_glm as glm;

use crate::camera::DEFAULT_FOV_Y;

/// Perspective projection parameters. The vertical field of view usually
/// comes from [`CameraState::fov_y_degrees`](crate::CameraState); near and
/// far default to the common viewer planes.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    /// Right-handed perspective matrix for the given width/height ratio.
    /// `aspect` must be positive; the rig's frame step guards degenerate
    /// viewports before calling this.
    pub fn matrix(&self, aspect: f32) -> glm::Mat4 {
        glm::perspective(aspect, self.fov_y_degrees.to_radians(), self.z_near, self.z_far)
    }

    /// Same planes with the field of view replaced, for per-frame zoom.
    pub fn with_fov_y(&self, fov_y_degrees: f32) -> Self {
        Self {
            fov_y_degrees,
            ..*self
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: DEFAULT_FOV_Y,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_planes_match_viewer_convention() {
        let proj = Projection::default();
        assert_eq!(proj.fov_y_degrees, 45.0);
        assert_eq!(proj.z_near, 0.1);
        assert_eq!(proj.z_far, 100.0);
    }

    #[test]
    fn matrix_matches_glm_perspective() {
        let proj = Projection::default().with_fov_y(60.0);
        let expected = glm::perspective(16.0 / 9.0, 60.0_f32.to_radians(), 0.1, 100.0);
        let got = proj.matrix(16.0 / 9.0);
        for i in 0..16 {
            assert!((got.as_slice()[i] - expected.as_slice()[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn with_fov_y_keeps_planes() {
        let proj = Projection {
            fov_y_degrees: 45.0,
            z_near: 0.5,
            z_far: 500.0,
        };
        let narrowed = proj.with_fov_y(10.0);
        assert_eq!(narrowed.fov_y_degrees, 10.0);
        assert_eq!(narrowed.z_near, 0.5);
        assert_eq!(narrowed.z_far, 500.0);
    }
}
