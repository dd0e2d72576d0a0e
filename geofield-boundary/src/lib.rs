use serde::{Deserialize, Serialize};

#[cfg(feature = "core-conversions")]
mod conv;

/// Widget configuration as rendered by the server next to the map element.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct GeoFieldData {
    pub source_selector          : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_selector         : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_lng_display_selector : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_display_selector     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng_display_selector     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom                     : Option<f64>,
    #[serde(default, alias = "scroll_wheel_zoom", skip_serializing_if = "Option::is_none")]
    pub scroll_wheel_zoom        : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srid                     : Option<NumericValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location         : Option<DefaultLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_in                  : Option<String>,
    #[serde(default)]
    pub in_react_streamfield     : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct DefaultLocation {
    pub lat: NumericValue,
    pub lng: NumericValue,
}

/// A number that might have been rendered as text.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericValue {
    fn from(from: f64) -> Self {
        Self::Number(from)
    }
}

impl From<String> for NumericValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}
