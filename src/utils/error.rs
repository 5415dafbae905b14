use thiserror::Error;

#[derive(Error, Debug)]
pub enum DcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid YAML format: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Schema validation failed: {0}")]
    SchemaError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DcError {
    /// Short machine-readable name used as `error_type` in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            DcError::IoError(_) => "IoError",
            DcError::YamlError(_) => "YamlError",
            DcError::SchemaError(_) => "SchemaError",
            DcError::SerializationError(_) => "SerializationError",
            DcError::FileNotFound { .. } => "FileNotFound",
            DcError::InvalidConfigValueError { .. } => "InvalidConfigValueError",
        }
    }
}

pub type Result<T> = std::result::Result<T, DcError>;
