use thiserror::Error;

use crate::entities::{geo::LatLng, location::LocationParseError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid default location ({0})")]
    DefaultLocation(LatLng),
    #[error("Unparseable default location: {0}")]
    UnparseableLocation(#[from] LocationParseError),
    #[error("Invalid zoom level {0}")]
    Zoom(f64),
    #[error("No coordinate display field configured")]
    MissingDisplayField,
    #[error("Either a combined or separate coordinate display fields must be configured, not both")]
    AmbiguousDisplayFields,
}
