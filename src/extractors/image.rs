use crate::error::AppError;
use crate::extractor::{Extraction, TagReader};
use crate::gps::{self, GpsTags};
use crate::metadata::MetadataRecord;
use exif::{In, Reader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct ImageTagReader;

impl TagReader for ImageTagReader {
    fn read(&self, path: &Path) -> Result<Extraction, AppError> {
        let img = image::open(path)?;

        let mut metadata = MetadataRecord::new();
        let format = image::ImageFormat::from_path(path)
            .map(|f| format!("{:?}", f).to_uppercase())
            .unwrap_or_else(|_| "Unknown".to_string());
        metadata.insert("File Type", format);
        metadata.insert("Dimensions", format!("{} x {} px", img.width(), img.height()));
        metadata.insert("Color Mode", format!("{:?}", img.color()));

        log::trace!("Extracting EXIF data for image: {:?}", path);
        let file = File::open(path)?;
        let mut buf_reader = BufReader::new(file);
        // A file without an EXIF container (plain PNG, for example) is not
        // an error; the basic image fields above still apply.
        let exif = Reader::new().read_from_container(&mut buf_reader).ok();

        let mut coordinates = None;
        if let Some(exif) = &exif {
            let gps_tags = GpsTags::from_exif(exif);
            if gps_tags.is_present() {
                match gps::convert(&gps_tags) {
                    Ok((lat, lon)) => {
                        log::debug!("GPS coordinates for {:?}: {}, {}", path, lat, lon);
                        metadata.insert("GPS Coordinates", format!("{}, {}", lat, lon));
                        coordinates = Some((lat, lon));
                    }
                    Err(e) => {
                        // Broken GPS data must not block the rest of the
                        // extraction; surface it as a single field.
                        log::warn!("GPS conversion failed for {:?}: {}", path, e);
                        metadata.insert("GPS Error", e);
                    }
                }
            }

            for field in exif.fields().filter(|f| f.ifd_num == In::PRIMARY) {
                metadata.insert(field.tag.to_string(), field.display_value());
            }
        } else {
            log::debug!("No EXIF data found for {:?}", path);
        }

        Ok(Extraction {
            metadata,
            coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    #[test]
    fn plain_png_yields_basic_fields_and_no_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        DynamicImage::ImageRgb8(RgbImage::new(4, 2)).save(&path).unwrap();

        let extraction = ImageTagReader.read(&path).unwrap();
        assert_eq!(extraction.metadata.get("File Type"), Some("PNG"));
        assert_eq!(extraction.metadata.get("Dimensions"), Some("4 x 2 px"));
        assert!(extraction.metadata.get("Color Mode").is_some());
        assert!(extraction.coordinates.is_none());
        assert!(extraction.metadata.get("GPS Error").is_none());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(ImageTagReader.read(&path).is_err());
    }
}
