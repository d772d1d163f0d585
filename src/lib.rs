//! Free-fly camera rig for real-time 3D viewers.
//!
//! The embedding application owns the window, the input devices and the GPU;
//! this crate owns the camera. Feed it sampled input deltas and a monotonic
//! timestamp once per frame, read back the view/projection matrices for the
//! render phase.

pub mod camera;
pub mod clock;
pub mod error;
pub mod pose;
pub mod projection;
pub mod rig;
pub mod settings;
pub mod uniform;

pub use camera::{CameraController, CameraState, MoveDirection};
pub use clock::FrameClock;
pub use error::FlycamError;
pub use pose::CameraPose;
pub use projection::Projection;
pub use rig::{CameraRig, FrameParams};
pub use settings::CameraSettings;
pub use uniform::CameraUniform;

/// Application name used for `confy` settings storage.
pub const CONFY_APP_NAME: &str = "flycam-rs";
