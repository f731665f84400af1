use crate::error::AppError;
use crate::extractor::{Extraction, TagReader};
use crate::metadata::MetadataRecord;
use lofty::{AudioFile, ItemKey, ItemValue, TaggedFileExt};
use std::path::Path;
use std::time::Duration;

pub struct AudioTagReader;

impl TagReader for AudioTagReader {
    fn read(&self, path: &Path) -> Result<Extraction, AppError> {
        let tagged = lofty::read_from_path(path)?;

        let mut metadata = MetadataRecord::new();
        metadata.insert("Format", format!("{:?}", tagged.file_type()));

        let properties = tagged.properties();
        match properties.audio_bitrate() {
            Some(kbps) => metadata.insert("Bitrate", format!("{} kbps", kbps)),
            None => metadata.insert("Bitrate", "N/A"),
        }
        metadata.insert("Duration", format_duration(properties.duration()));

        let mut tag_items = 0;
        for tag in tagged.tags() {
            for item in tag.items() {
                let key = match item.key() {
                    ItemKey::Unknown(name) => name.clone(),
                    known => format!("{:?}", known),
                };
                match item.value() {
                    ItemValue::Text(text) | ItemValue::Locator(text) => {
                        // Repeated keys (multiple artists, say) are joined
                        // into one flattened value.
                        metadata.append(key, text);
                        tag_items += 1;
                    }
                    ItemValue::Binary(bytes) => {
                        log::trace!("Skipping binary tag item {:?} ({} bytes)", key, bytes.len());
                    }
                }
            }
        }

        if tag_items == 0 {
            log::debug!("No tags found in {:?}", path);
            metadata.insert("Warning", "No metadata found");
        }

        Ok(Extraction::from_metadata(metadata))
    }
}

fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
