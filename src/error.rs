use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlycamError {
    #[error("settings store error: {0}")]
    Config(#[from] confy::ConfyError),

    #[error("pose file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pose encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting {name}: {value}")]
    InvalidSetting { name: &'static str, value: f32 },
}
