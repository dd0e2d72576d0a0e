use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::geo::{parse_degrees, LatLng};

/// Spatial reference system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srid(u32);

impl Srid {
    /// WGS 84, used by GPS and most web maps.
    pub const WGS84: Self = Self(4326);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }
}

impl Default for Srid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid SRID '{0}'")]
pub struct SridParseError(pub String);

impl FromStr for Srid {
    type Err = SridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| SridParseError(s.to_string()))
    }
}

/// A point together with its reference system.
///
/// The `Display` implementation produces the value stored
/// in the backing form field: `SRID=<srid>;POINT(<lng> <lat>)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub srid: Srid,
    pub pos: LatLng,
}

impl Location {
    pub const fn new(srid: Srid, pos: LatLng) -> Self {
        Self { srid, pos }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { srid, pos } = self;
        write!(f, "SRID={srid};POINT({} {})", pos.lng, pos.lat)
    }
}

/// The unconverted text components of a serialized location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationStruct {
    pub srid: String,
    pub default_location: RawLatLng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLatLng {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationParseError {
    #[error("Unparseable location '{0}'")]
    Unparseable(String),
    #[error(transparent)]
    Srid(#[from] SridParseError),
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
}

impl TryFrom<LocationStruct> for Location {
    type Error = LocationParseError;

    fn try_from(from: LocationStruct) -> Result<Self, Self::Error> {
        let LocationStruct {
            srid,
            default_location: RawLatLng { lat, lng },
        } = from;
        let srid = srid.parse()?;
        let lat = parse_degrees(&lat).ok_or(LocationParseError::Lat(lat))?;
        let lng = parse_degrees(&lng).ok_or(LocationParseError::Lng(lng))?;
        Ok(Self::new(srid, LatLng::new(lat, lng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_longitude_first() {
        let loc = Location::new(Srid::WGS84, LatLng::new(59.3293235, 18.0685808));
        assert_eq!("SRID=4326;POINT(18.0685808 59.3293235)", loc.to_string());
    }

    #[test]
    fn display_whole_numbers_without_fraction() {
        let loc = Location::new(Srid::new(3857), LatLng::new(0.0, -12.0));
        assert_eq!("SRID=3857;POINT(-12 0)", loc.to_string());
    }

    #[test]
    fn convert_struct() {
        let s = LocationStruct {
            srid: "4326".into(),
            default_location: RawLatLng {
                lat: "59.3293235".into(),
                lng: "18.0685808".into(),
            },
        };
        let loc = Location::try_from(s).unwrap();
        assert_eq!(Srid::WGS84, loc.srid);
        assert_eq!(LatLng::new(59.3293235, 18.0685808), loc.pos);
    }

    #[test]
    fn convert_struct_with_invalid_components() {
        let s = LocationStruct {
            srid: "99999999999".into(),
            default_location: RawLatLng {
                lat: "1".into(),
                lng: "2".into(),
            },
        };
        assert!(matches!(
            Location::try_from(s),
            Err(LocationParseError::Srid(_))
        ));
        let s = LocationStruct {
            srid: "4326".into(),
            default_location: RawLatLng {
                lat: "1.2.3".into(),
                lng: "2".into(),
            },
        };
        assert_eq!(
            Err(LocationParseError::Lat("1.2.3".into())),
            Location::try_from(s)
        );
    }

    #[test]
    fn parse_srid() {
        assert_eq!(Ok(Srid::new(4326)), "4326".parse());
        assert!("-1".parse::<Srid>().is_err());
        assert!("".parse::<Srid>().is_err());
    }
}
