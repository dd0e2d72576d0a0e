use regex::Regex;

use crate::entities::location::{Location, LocationParseError, LocationStruct, RawLatLng};

lazy_static! {
    static ref LOCATION_REGEX: Regex =
        Regex::new(r"^SRID=(\d+);POINT\s?\((-?[\d.]+)\s(-?[\d.]+)\)$").unwrap();
}

/// Splits a serialized location into its text components.
///
/// Returns `Ok(None)` for empty input. The captured numbers
/// are only checked against the character classes of the pattern.
pub fn location_string_to_struct(
    location: &str,
) -> Result<Option<LocationStruct>, LocationParseError> {
    if location.is_empty() {
        return Ok(None);
    }
    let caps = LOCATION_REGEX
        .captures(location)
        .ok_or_else(|| LocationParseError::Unparseable(location.to_string()))?;
    Ok(Some(LocationStruct {
        srid: caps[1].to_string(),
        default_location: RawLatLng {
            lng: caps[2].to_string(),
            lat: caps[3].to_string(),
        },
    }))
}

/// Parses a serialized location into a typed [`Location`].
pub fn parse_location(location: &str) -> Result<Option<Location>, LocationParseError> {
    location_string_to_struct(location)?
        .map(Location::try_from)
        .transpose()
}
