use crate::error::AppError;
use crate::metadata::MetadataRecord;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON object with string keys and values.
    Json,
    /// One `key: value` line per field, in extraction order.
    Text,
}

impl ExportFormat {
    /// Infer the format from the target path; anything that is not `.txt`
    /// exports as JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => ExportFormat::Text,
            _ => ExportFormat::Json,
        }
    }
}

pub fn export(record: &MetadataRecord, path: &Path, format: ExportFormat) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => serde_json::to_writer_pretty(&mut writer, record)?,
        ExportFormat::Text => {
            for (key, value) in record.iter() {
                writeln!(writer, "{}: {}", key, value)?;
            }
        }
    }

    writer.flush()?;
    log::info!("Metadata exported to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.insert("File Type", "JPEG");
        record.insert("Dimensions", "640 x 480 px");
        record.insert("GPS Coordinates", "-33.94, -18.373889");
        record
    }

    #[test]
    fn json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        let record = sample_record();

        export(&record, &path, ExportFormat::Json).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let reread: MetadataRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, record);
        let keys: Vec<_> = reread.keys().collect();
        let original: Vec<_> = record.keys().collect();
        assert_eq!(keys, original);
    }

    #[test]
    fn text_export_is_line_oriented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.txt");
        export(&sample_record(), &path, ExportFormat::Text).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(
            lines,
            [
                "File Type: JPEG",
                "Dimensions: 640 x 480 px",
                "GPS Coordinates: -33.94, -18.373889",
            ]
        );
    }

    #[test]
    fn format_is_inferred_from_the_extension() {
        assert_eq!(ExportFormat::for_path(Path::new("out.txt")), ExportFormat::Text);
        assert_eq!(ExportFormat::for_path(Path::new("out.TXT")), ExportFormat::Text);
        assert_eq!(ExportFormat::for_path(Path::new("out.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::for_path(Path::new("out")), ExportFormat::Json);
    }
}
