use crate::CONFY_APP_NAME;
use crate::camera::{DEFAULT_FOV_Y, DEFAULT_SENSITIVITY, DEFAULT_SPEED, FOV_Y_MAX, FOV_Y_MIN};
use crate::error::FlycamError;

use serde::{Deserialize, Serialize};

/// Persisted camera tunables. Loaded at startup, saved when the embedding
/// application changes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub fov_y_degrees: f32,
    pub constrain_pitch: bool,
    pub world_up: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            fov_y_degrees: DEFAULT_FOV_Y,
            constrain_pitch: true,
            world_up: [0.0, 1.0, 0.0],
        }
    }
}

impl CameraSettings {
    pub fn load() -> Self {
        match confy::load(CONFY_APP_NAME, "camera") {
            Ok(settings) => settings,
            Err(e) => {
                log::debug!("using default camera settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), FlycamError> {
        confy::store(CONFY_APP_NAME, "camera", self)?;
        Ok(())
    }

    /// Reject values the camera cannot work with. Loaded settings files are
    /// user-editable, so this runs before they are applied.
    pub fn validate(&self) -> Result<(), FlycamError> {
        if !(self.movement_speed > 0.0) {
            return Err(FlycamError::InvalidSetting {
                name: "movement_speed",
                value: self.movement_speed,
            });
        }
        if !(self.mouse_sensitivity > 0.0) {
            return Err(FlycamError::InvalidSetting {
                name: "mouse_sensitivity",
                value: self.mouse_sensitivity,
            });
        }
        if !(self.fov_y_degrees >= FOV_Y_MIN && self.fov_y_degrees <= FOV_Y_MAX) {
            return Err(FlycamError::InvalidSetting {
                name: "fov_y_degrees",
                value: self.fov_y_degrees,
            });
        }
        let up_len_sq = self.world_up.iter().map(|c| c * c).sum::<f32>();
        if !(up_len_sq > 0.0) {
            return Err(FlycamError::InvalidSetting {
                name: "world_up",
                value: up_len_sq,
            });
        }
        Ok(())
    }
}
