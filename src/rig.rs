use nalgebra_glm as glm;

use crate::camera::{CameraController, CameraState, MoveDirection};
use crate::clock::FrameClock;
use crate::error::FlycamError;
use crate::projection::Projection;
use crate::settings::CameraSettings;
use crate::uniform::CameraUniform;

/// Matrices the render phase consumes, produced once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameParams {
    pub view: glm::Mat4,
    pub projection: glm::Mat4,
    pub view_proj: glm::Mat4,
    pub eye: glm::Vec3,
    pub fov_y_degrees: f32,
}

impl FrameParams {
    /// Byte-castable block for the camera uniform buffer.
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.view_proj, &self.eye);
        uniform
    }
}

/// One viewer session: a camera controller, the frame clock and the
/// projection planes, with no state left at process scope.
///
/// The input phase forwards sampled events here, `begin_frame` advances time
/// and applies held movement, and `frame` hands the render phase its
/// matrices.
pub struct CameraRig {
    controller: CameraController,
    clock: FrameClock,
    projection: Projection,
}

impl CameraRig {
    pub fn new(camera: CameraState) -> Self {
        Self {
            controller: CameraController::new(camera),
            clock: FrameClock::new(),
            projection: Projection::default(),
        }
    }

    /// Build a rig from validated settings, with the camera at `position`.
    pub fn from_settings(
        position: glm::Vec3,
        settings: &CameraSettings,
    ) -> Result<Self, FlycamError> {
        settings.validate()?;
        let camera = CameraState::with_settings(position, settings);
        Ok(Self {
            controller: CameraController::with_settings(camera, settings),
            clock: FrameClock::new(),
            projection: Projection::default(),
        })
    }

    pub fn camera(&self) -> &CameraState {
        self.controller.state()
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        self.controller.state_mut()
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CameraController {
        &mut self.controller
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn set_clip_planes(&mut self, z_near: f32, z_far: f32) {
        self.projection.z_near = z_near;
        self.projection.z_far = z_far;
    }

    // Input-phase forwarding.

    pub fn on_direction(&mut self, direction: MoveDirection, pressed: bool) {
        self.controller.on_direction(direction, pressed);
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> bool {
        self.controller.on_cursor_moved(x, y)
    }

    pub fn on_scroll(&mut self, dy: f32) {
        self.controller.on_scroll(dy);
    }

    /// Advance the clock and apply held movement. Returns the frame interval
    /// for anything else the caller steps by elapsed time.
    pub fn begin_frame(&mut self, now_seconds: f64) -> f32 {
        let dt = self.clock.tick(now_seconds);
        self.controller.update(dt);
        dt
    }

    /// Matrices for the current pose. `None` while the viewport is
    /// degenerate (zero-sized or not yet laid out), matching the render
    /// skip the embedding viewer does for a minimized window.
    pub fn frame(&self, aspect: f32) -> Option<FrameParams> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return None;
        }
        let camera = self.controller.state();
        let fov_y_degrees = camera.fov_y_degrees();
        let projection = self.projection.with_fov_y(fov_y_degrees).matrix(aspect);
        let view = camera.view_matrix();
        Some(FrameParams {
            view,
            projection,
            view_proj: projection * view,
            eye: camera.position(),
            fov_y_degrees,
        })
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }
}
