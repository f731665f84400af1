use crate::config::AppConfig;
use crate::error::AppError;
use crate::extractor::TagReader;
use crate::extractors::{audio::AudioTagReader, image::ImageTagReader, pdf::PdfTagReader};
use crate::metadata::FileSession;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Audio,
}

impl FileKind {
    fn label(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "PDF",
            FileKind::Audio => "audio",
        }
    }

    fn reader(self) -> Box<dyn TagReader> {
        match self {
            FileKind::Image => Box::new(ImageTagReader),
            FileKind::Pdf => Box::new(PdfTagReader),
            FileKind::Audio => Box::new(AudioTagReader),
        }
    }
}

/// Extension lookup against the configured extension sets.
pub fn detect_kind(config: &AppConfig, path: &Path) -> Option<FileKind> {
    let ext = path.extension().and_then(|s| s.to_str())?.to_lowercase();
    if config.image_extensions.contains(&ext) {
        Some(FileKind::Image)
    } else if config.pdf_extensions.contains(&ext) {
        Some(FileKind::Pdf)
    } else if config.audio_extensions.contains(&ext) {
        Some(FileKind::Audio)
    } else {
        None
    }
}

/// Load one file, fully replacing any previous session. The returned
/// session owns everything extracted from the file.
pub fn process_file(config: &AppConfig, path: &Path) -> Result<FileSession, AppError> {
    log::info!("Processing file: {:?}", path);

    let kind = detect_kind(config, path)
        .ok_or_else(|| AppError::UnsupportedFileType(path.display().to_string()))?;
    log::debug!("Detected {} file: {:?}", kind.label(), path);

    let mut extraction = kind.reader().read(path).map_err(|e| {
        log::warn!("{} extraction failed for {:?}: {}", kind.label(), path, e);
        AppError::Extraction(format!("{} reader failed for {}: {}", kind.label(), path.display(), e))
    })?;

    extraction
        .metadata
        .insert("MIME Type", mime_guess::from_path(path).first_or_octet_stream());

    log::info!(
        "Metadata extracted from {:?}: {} fields",
        path,
        extraction.metadata.len()
    );

    Ok(FileSession {
        path: path.to_path_buf(),
        metadata: extraction.metadata,
        coordinates: extraction.coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn test_config() -> AppConfig {
        let set = |items: &[&str]| -> HashSet<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        AppConfig {
            log_level: "info".to_string(),
            image_extensions: set(&["jpg", "jpeg", "png"]),
            pdf_extensions: set(&["pdf"]),
            audio_extensions: set(&["mp3", "wav", "flac"]),
        }
    }

    #[test]
    fn extensions_map_to_their_readers() {
        let config = test_config();
        assert_eq!(
            detect_kind(&config, Path::new("photo.JPG")),
            Some(FileKind::Image)
        );
        assert_eq!(
            detect_kind(&config, Path::new("report.pdf")),
            Some(FileKind::Pdf)
        );
        assert_eq!(
            detect_kind(&config, Path::new("song.flac")),
            Some(FileKind::Audio)
        );
    }

    #[test]
    fn unknown_and_missing_extensions_are_unsupported() {
        let config = test_config();
        assert_eq!(detect_kind(&config, Path::new("archive.zip")), None);
        assert_eq!(detect_kind(&config, Path::new("noextension")), None);
    }

    #[test]
    fn unsupported_file_type_is_reported_not_extracted() {
        let config = test_config();
        let result = process_file(&config, &PathBuf::from("archive.zip"));
        assert!(matches!(result, Err(AppError::UnsupportedFileType(_))));
    }

    #[test]
    fn reader_failures_surface_as_extraction_errors() {
        let config = test_config();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png").unwrap();
        let result = process_file(&config, &path);
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
