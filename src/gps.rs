use exif::{In, Tag, Value};
use thiserror::Error;

/// Output precision, 6 decimal places (~0.11 m).
const DECIMAL_SF: f64 = 1_000_000.0;
const LAT_MAX: f64 = 90.0;
const LON_MAX: f64 = 180.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GpsError {
    #[error("missing GPS latitude")]
    MissingLatitude,

    #[error("missing GPS longitude")]
    MissingLongitude,

    #[error("missing GPS latitude reference")]
    MissingLatitudeRef,

    #[error("missing GPS longitude reference")]
    MissingLongitudeRef,

    #[error("invalid hemisphere reference: {0:?}")]
    InvalidReference(String),

    #[error("rational with zero denominator")]
    ZeroDenominator,

    #[error("non-finite DMS component")]
    NonFinite,

    #[error("coordinate out of range: {0}")]
    OutOfRange(f64),
}

/// One degrees/minutes/seconds component, either as stored in EXIF
/// (a numerator/denominator pair) or already resolved to a real number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DmsComponent {
    Rational { num: u32, den: u32 },
    Real(f64),
}

impl DmsComponent {
    fn resolve(self) -> Result<f64, GpsError> {
        match self {
            DmsComponent::Rational { den: 0, .. } => Err(GpsError::ZeroDenominator),
            DmsComponent::Rational { num, den } => Ok(f64::from(num) / f64::from(den)),
            DmsComponent::Real(v) if v.is_finite() => Ok(v),
            DmsComponent::Real(_) => Err(GpsError::NonFinite),
        }
    }
}

/// Degrees, minutes, seconds.
pub type DmsTriple = [DmsComponent; 3];

/// The GPS tags harvested from an EXIF container. Any of them may be
/// absent; `convert` decides whether the set is complete enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsTags {
    pub latitude: Option<DmsTriple>,
    pub latitude_ref: Option<String>,
    pub longitude: Option<DmsTriple>,
    pub longitude_ref: Option<String>,
}

impl GpsTags {
    pub fn from_exif(exif: &exif::Exif) -> Self {
        Self {
            latitude: dms_triple(exif, Tag::GPSLatitude),
            latitude_ref: reference(exif, Tag::GPSLatitudeRef),
            longitude: dms_triple(exif, Tag::GPSLongitude),
            longitude_ref: reference(exif, Tag::GPSLongitudeRef),
        }
    }

    /// Whether the file carried any GPS tag at all. Used by callers to
    /// distinguish "no GPS data" from "GPS data present but broken".
    pub fn is_present(&self) -> bool {
        self.latitude.is_some()
            || self.latitude_ref.is_some()
            || self.longitude.is_some()
            || self.longitude_ref.is_some()
    }
}

fn dms_triple(exif: &exif::Exif, tag: Tag) -> Option<DmsTriple> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(parts) if parts.len() == 3 => Some([
            DmsComponent::Rational { num: parts[0].num, den: parts[0].denom },
            DmsComponent::Rational { num: parts[1].num, den: parts[1].denom },
            DmsComponent::Rational { num: parts[2].num, den: parts[2].denom },
        ]),
        Value::Float(parts) if parts.len() == 3 => Some([
            DmsComponent::Real(f64::from(parts[0])),
            DmsComponent::Real(f64::from(parts[1])),
            DmsComponent::Real(f64::from(parts[2])),
        ]),
        Value::Double(parts) if parts.len() == 3 => Some([
            DmsComponent::Real(parts[0]),
            DmsComponent::Real(parts[1]),
            DmsComponent::Real(parts[2]),
        ]),
        _ => None,
    }
}

fn reference(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Convert a DMS tag set into a signed `(latitude, longitude)` pair,
/// rounded to 6 decimal places.
///
/// Pure function: no side effects, identical output for identical input.
/// A missing triple, a missing or unrecognized hemisphere reference, a
/// zero-denominator rational, and an out-of-range result are all explicit
/// errors rather than silently defaulted values.
pub fn convert(tags: &GpsTags) -> Result<(f64, f64), GpsError> {
    let lat_dms = tags.latitude.ok_or(GpsError::MissingLatitude)?;
    let lon_dms = tags.longitude.ok_or(GpsError::MissingLongitude)?;
    let lat_ref = tags
        .latitude_ref
        .as_deref()
        .ok_or(GpsError::MissingLatitudeRef)?;
    let lon_ref = tags
        .longitude_ref
        .as_deref()
        .ok_or(GpsError::MissingLongitudeRef)?;

    let lat = signed(decimal_degrees(&lat_dms)?, lat_ref, "N", "S")?;
    let lon = signed(decimal_degrees(&lon_dms)?, lon_ref, "E", "W")?;

    if lat.abs() > LAT_MAX {
        return Err(GpsError::OutOfRange(lat));
    }
    if lon.abs() > LON_MAX {
        return Err(GpsError::OutOfRange(lon));
    }

    Ok((round_coordinate(lat), round_coordinate(lon)))
}

fn decimal_degrees(dms: &DmsTriple) -> Result<f64, GpsError> {
    let degrees = dms[0].resolve()?;
    let minutes = dms[1].resolve()?;
    let seconds = dms[2].resolve()?;
    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

fn signed(value: f64, reference: &str, positive: &str, negative: &str) -> Result<f64, GpsError> {
    if reference.eq_ignore_ascii_case(positive) {
        Ok(value)
    } else if reference.eq_ignore_ascii_case(negative) {
        Ok(-value)
    } else {
        Err(GpsError::InvalidReference(reference.to_string()))
    }
}

fn round_coordinate(v: f64) -> f64 {
    (v * DECIMAL_SF).round() / DECIMAL_SF
}
