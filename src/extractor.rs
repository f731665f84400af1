use crate::error::AppError;
use crate::metadata::MetadataRecord;
use std::path::Path;

/// What one tag reader produced for one file. Coordinates are only set by
/// readers whose format can carry geolocation (EXIF images today).
#[derive(Debug)]
pub struct Extraction {
    pub metadata: MetadataRecord,
    pub coordinates: Option<(f64, f64)>,
}

impl Extraction {
    pub fn from_metadata(metadata: MetadataRecord) -> Self {
        Self {
            metadata,
            coordinates: None,
        }
    }
}

pub trait TagReader {
    fn read(&self, path: &Path) -> Result<Extraction, AppError>;
}
