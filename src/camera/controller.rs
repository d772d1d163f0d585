use super::{CameraState, MoveDirection};
use crate::settings::CameraSettings;

/// Owns a [`CameraState`] and the per-session input bookkeeping around it:
/// which movement directions are held, the last cursor sample, and whether
/// pitch is constrained.
///
/// This replaces the usual pile of process-scope globals (`camera`,
/// `first_mouse`, `last_x`, `last_y`) with one value the embedding
/// application passes to its input and render phases.
pub struct CameraController {
    state: CameraState,
    forward_held: bool,
    backward_held: bool,
    left_held: bool,
    right_held: bool,
    last_cursor_pos: Option<(f64, f64)>,
    constrain_pitch: bool,
}

impl CameraController {
    pub fn new(state: CameraState) -> Self {
        Self {
            state,
            forward_held: false,
            backward_held: false,
            left_held: false,
            right_held: false,
            last_cursor_pos: None,
            constrain_pitch: true,
        }
    }

    pub fn with_settings(state: CameraState, settings: &CameraSettings) -> Self {
        let mut controller = Self::new(state);
        controller.constrain_pitch = settings.constrain_pitch;
        controller
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }

    /// Press/release bookkeeping for movement keys. All four directions may
    /// be held at once; opposing ones cancel out in `update`.
    pub fn on_direction(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Forward => self.forward_held = pressed,
            MoveDirection::Backward => self.backward_held = pressed,
            MoveDirection::Left => self.left_held = pressed,
            MoveDirection::Right => self.right_held = pressed,
        }
    }

    pub fn is_held(&self, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Forward => self.forward_held,
            MoveDirection::Backward => self.backward_held,
            MoveDirection::Left => self.left_held,
            MoveDirection::Right => self.right_held,
        }
    }

    /// Absolute cursor sample in window pixels. The first sample after a
    /// reset only seeds the latch; later samples turn into look deltas.
    /// Returns whether a delta was applied.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> bool {
        let handled = if let Some((last_x, last_y)) = self.last_cursor_pos {
            let dx = (last_x - x) as f32;
            let dy = (y - last_y) as f32;
            self.state.apply_look_delta(dx, dy, self.constrain_pitch);
            true
        } else {
            false
        };
        self.last_cursor_pos = Some((x, y));
        handled
    }

    /// Vertical scroll delta, forwarded to the field-of-view zoom.
    pub fn on_scroll(&mut self, dy: f32) {
        self.state.apply_zoom_delta(dy);
    }

    /// Apply one movement step per held direction for this frame.
    pub fn update(&mut self, elapsed_seconds: f32) {
        for direction in MoveDirection::ALL {
            if self.is_held(direction) {
                self.state.apply_movement(direction, elapsed_seconds);
            }
        }
    }

    /// Reset the camera pose and clear the cursor latch, so the next sample
    /// does not produce a jump.
    pub fn reset(&mut self) {
        self.state.reset();
        self.last_cursor_pos = None;
        log::debug!("camera reset to default pose");
    }
}
