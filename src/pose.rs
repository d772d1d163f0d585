use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Serializable camera snapshot: everything needed to restore a view, and
/// nothing derived. Captured with [`CameraState::pose`](crate::CameraState::pose)
/// and restored with [`CameraState::apply_pose`](crate::CameraState::apply_pose).
///
/// Viewers keep these as bookmarks, so the struct round-trips through JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y_degrees: f32,
}

impl CameraPose {
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let data = fs::read_to_string(path)?;
        let pose = serde_json::from_str(&data)?;
        log::debug!("loaded camera pose from {}", path.display());
        Ok(pose)
    }

    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        log::debug!("saved camera pose to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pose() -> CameraPose {
        CameraPose {
            position: [0.0, 10.0, 30.0],
            yaw: -90.0,
            pitch: -15.5,
            fov_y_degrees: 37.0,
        }
    }

    #[test]
    fn json_round_trip() {
        let pose = sample_pose();
        let json = serde_json::to_string(&pose).unwrap();
        let back: CameraPose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("flycam-pose-{}.json", std::process::id()));
        let pose = sample_pose();
        pose.save(&path).unwrap();
        let back = CameraPose::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(back, pose);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = CameraPose::load(Path::new("/nonexistent/flycam-pose.json")).unwrap_err();
        assert!(matches!(err, FlycamError::Io(_)));
    }

    #[test]
    fn load_garbage_is_json_error() {
        let path = std::env::temp_dir().join(format!("flycam-garbage-{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        let err = CameraPose::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, FlycamError::Json(_)));
    }
}
