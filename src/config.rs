use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub image_extensions: HashSet<String>,
    pub pdf_extensions: HashSet<String>,
    pub audio_extensions: HashSet<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("log_level", "info")?
            .set_default(
                "image_extensions",
                vec!["jpg", "jpeg", "png", "tif", "tiff", "webp"],
            )?
            .set_default("pdf_extensions", vec!["pdf"])?
            .set_default(
                "audio_extensions",
                vec!["mp3", "wav", "flac", "ogg", "m4a", "mp4"],
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            .build()?;

        s.try_deserialize()
    }
}
