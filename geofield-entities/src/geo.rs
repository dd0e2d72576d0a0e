use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

const LAT_LNG_SEPARATOR: char = ',';

/// A geographical position in degrees, as shown on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    pub fn is_in_range(self) -> bool {
        self.is_valid()
            && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

/// Formats as `<lat>,<lng>`, the representation of the combined display field.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{LAT_LNG_SEPARATOR}{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatLngParseError {
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
}

impl FromStr for LatLng {
    type Err = LatLngParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(LAT_LNG_SEPARATOR).collect_tuple() else {
            return Err(LatLngParseError::Format(s.to_string()));
        };
        let lat = parse_degrees(lat_str).ok_or_else(|| LatLngParseError::Lat(lat_str.into()))?;
        let lng = parse_degrees(lng_str).ok_or_else(|| LatLngParseError::Lng(lng_str.into()))?;
        Ok(Self::new(lat, lng))
    }
}

/// Parses a single coordinate component.
///
/// Surrounding whitespace is ignored. Blank input and
/// non-finite numbers (`NaN`, `inf`) are rejected.
/// Zero is a regular value.
pub fn parse_degrees(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|deg| deg.is_finite())
}

/// A position whose components were parsed independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialLatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl PartialLatLng {
    pub fn complete(self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }
}

impl From<LatLng> for PartialLatLng {
    fn from(from: LatLng) -> Self {
        let LatLng { lat, lng } = from;
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }
}

/// Parses the text of a combined `<lat>,<lng>` field.
pub fn parse_combined_lat_lng(raw: &str) -> Option<LatLng> {
    raw.parse().ok()
}

/// Parses the texts of separate latitude and longitude fields.
pub fn parse_split_lat_lng(lat_str: &str, lng_str: &str) -> PartialLatLng {
    PartialLatLng {
        lat: parse_degrees(lat_str),
        lng: parse_degrees(lng_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_combined() {
        assert_eq!(
            Some(LatLng::new(59.3293235, 18.0685808)),
            parse_combined_lat_lng("59.3293235,18.0685808")
        );
        assert_eq!(
            Some(LatLng::new(-33.5, 151.25)),
            parse_combined_lat_lng(" -33.5 , 151.25 ")
        );
        assert_eq!(None, parse_combined_lat_lng("abc"));
        assert_eq!(None, parse_combined_lat_lng("1.0"));
        assert_eq!(None, parse_combined_lat_lng("1.0,2.0,3.0"));
        assert_eq!(None, parse_combined_lat_lng("1.0,"));
        assert_eq!(None, parse_combined_lat_lng(",1.0"));
        assert_eq!(None, parse_combined_lat_lng("NaN,1.0"));
        assert_eq!(None, parse_combined_lat_lng("1.0,inf"));
    }

    #[test]
    fn zero_is_a_valid_coordinate() {
        assert_eq!(Some(LatLng::new(0.0, 0.0)), parse_combined_lat_lng("0,0"));
        assert_eq!(Some(LatLng::new(0.0, 12.5)), parse_combined_lat_lng("0,12.5"));
        assert_eq!(Some(LatLng::new(48.1, 0.0)), parse_combined_lat_lng("48.1,0"));
        let partial = parse_split_lat_lng("0", "0.0");
        assert_eq!(Some(0.0), partial.lat);
        assert_eq!(Some(0.0), partial.lng);
    }

    #[test]
    fn parse_split() {
        let partial = parse_split_lat_lng("48.7755", "abc");
        assert_eq!(Some(48.7755), partial.lat);
        assert_eq!(None, partial.lng);
        assert_eq!(None, partial.complete());

        let partial = parse_split_lat_lng("", "9.1827");
        assert_eq!(None, partial.lat);
        assert_eq!(Some(9.1827), partial.lng);

        let partial = parse_split_lat_lng("48.7755", "9.1827");
        assert_eq!(Some(LatLng::new(48.7755, 9.1827)), partial.complete());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Err(LatLngParseError::Format("foo".into())),
            "foo".parse::<LatLng>()
        );
        assert_eq!(
            Err(LatLngParseError::Lat("x".into())),
            "x,1".parse::<LatLng>()
        );
        assert_eq!(
            Err(LatLngParseError::Lng("y".into())),
            "1,y".parse::<LatLng>()
        );
    }

    #[test]
    fn display_combined() {
        assert_eq!("59.3293235,18.0685808", LatLng::new(59.3293235, 18.0685808).to_string());
        assert_eq!("0,0", LatLng::new(0.0, 0.0).to_string());
        assert_eq!("-1.5,-0.25", LatLng::new(-1.5, -0.25).to_string());
    }

    #[test]
    fn range() {
        assert!(LatLng::new(90.0, 180.0).is_in_range());
        assert!(LatLng::new(-90.0, -180.0).is_in_range());
        assert!(!LatLng::new(90.000001, 0.0).is_in_range());
        assert!(!LatLng::new(0.0, -180.000001).is_in_range());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn display_then_parse_random_positions() {
        use rand::prelude::*;
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let pos = LatLng::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            assert_eq!(Some(pos), parse_combined_lat_lng(&pos.to_string()));
        }
    }
}
