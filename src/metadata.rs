use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordered field name -> value mapping collected from one file. Values are
/// flattened to strings at insertion so display and export see one shape.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: IndexMap<String, String>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.fields.insert(key.into(), value.to_string());
    }

    /// Insert, joining onto any existing value with `, `. This is how
    /// list-valued tags (multiple artists, keywords) are flattened.
    pub fn append(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.fields.get_mut(&key) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                self.fields.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

/// Everything extracted from one file. Produced wholesale by each load;
/// exactly one session is live at a time.
#[derive(Debug, Clone)]
pub struct FileSession {
    pub path: PathBuf,
    pub metadata: MetadataRecord,
    pub coordinates: Option<(f64, f64)>,
}
