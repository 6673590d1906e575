use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("invalid loader id: {id}")]
    InvalidLoaderId { id: i32 },

    #[error("no package data for module: {module}")]
    MissingModuleData { module: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ImageError>;
