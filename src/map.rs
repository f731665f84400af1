use crate::error::AppError;

pub fn maps_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={},{}", lat, lon)
}

pub fn open_in_browser(lat: f64, lon: f64) -> Result<(), AppError> {
    let url = maps_url(lat, lon);
    log::info!("Opening map at {}, {}", lat, lon);
    opener::open(&url)?;
    Ok(())
}
