use crate::error::AppError;
use crate::extractor::{Extraction, TagReader};
use crate::metadata::MetadataRecord;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

pub struct PdfTagReader;

impl TagReader for PdfTagReader {
    fn read(&self, path: &Path) -> Result<Extraction, AppError> {
        let doc = Document::load(path)?;

        let mut metadata = MetadataRecord::new();
        metadata.insert("Pages", doc.get_pages().len());
        metadata.insert("Encrypted", doc.is_encrypted());

        match info_dictionary(&doc) {
            Some(info) => {
                for (key, value) in info.iter() {
                    let key = String::from_utf8_lossy(key);
                    let key = key.trim_start_matches('/');
                    if let Some(text) = object_text(&doc, value) {
                        metadata.insert(key, text);
                    } else {
                        log::debug!("Skipping non-textual info entry {:?} in {:?}", key, path);
                    }
                }
            }
            None => log::debug!("No document information dictionary in {:?}", path),
        }

        Ok(Extraction::from_metadata(metadata))
    }
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn object_text(doc: &Document, object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Object::Integer(v) => Some(v.to_string()),
        Object::Real(v) => Some(v.to_string()),
        Object::Boolean(v) => Some(v.to_string()),
        Object::Reference(id) => doc
            .get_object(*id)
            .ok()
            .and_then(|resolved| object_text(doc, resolved)),
        _ => None,
    }
}

/// PDF text strings are either UTF-16BE with a byte order mark or a
/// single-byte encoding close enough to UTF-8 for metadata purposes.
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let code_units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&code_units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::StringFormat;

    #[test]
    fn decodes_utf16be_text_strings() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_text_string(&bytes), "Hi");
    }

    #[test]
    fn decodes_plain_text_strings() {
        assert_eq!(decode_text_string(b"Annual Report"), "Annual Report");
    }

    #[test]
    fn info_entries_strip_the_namespace_marker() {
        let mut doc = Document::with_version("1.5");
        let mut info = Dictionary::new();
        info.set(
            "Title",
            Object::String(b"Quarterly".to_vec(), StringFormat::Literal),
        );
        info.set(
            "/Author",
            Object::String(b"J. Doe".to_vec(), StringFormat::Literal),
        );
        doc.trailer.set("Info", Object::Dictionary(info));

        let info = info_dictionary(&doc).unwrap();
        let mut metadata = MetadataRecord::new();
        for (key, value) in info.iter() {
            let key = String::from_utf8_lossy(key);
            if let Some(text) = object_text(&doc, value) {
                metadata.insert(key.trim_start_matches('/'), text);
            }
        }
        assert_eq!(metadata.get("Title"), Some("Quarterly"));
        assert_eq!(metadata.get("Author"), Some("J. Doe"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(PdfTagReader.read(Path::new("/nonexistent/file.pdf")).is_err());
    }
}
