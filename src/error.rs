use crate::gps::GpsError;
use exif::Error as ExifError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("EXIF error: {0}")]
    Exif(#[from] ExifError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Audio error: {0}")]
    Audio(#[from] lofty::LoftyError),

    #[error("JSON error: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("GPS conversion error: {0}")]
    Gps(#[from] GpsError),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Failed to open URL: {0}")]
    Browser(#[from] opener::OpenError),
}
