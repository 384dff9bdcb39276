use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Download failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("PDF parsing failed: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog file error: {0}")]
    CatalogFileError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
