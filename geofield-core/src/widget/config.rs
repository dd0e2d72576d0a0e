use crate::{
    entities::{geo::LatLng, location::Srid},
    widget::{error::Error, Field},
};

pub const DEFAULT_ZOOM: f64 = 7.0;
pub const DEFAULT_LOCATION: LatLng = LatLng::new(0.0, 0.0);
pub const DEFAULT_SCROLL_WHEEL_ZOOM: bool = true;

/// How the coordinates are presented to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateFieldLayout {
    /// One text field containing `<lat>,<lng>`.
    Combined { lat_lng_selector: String },
    /// Separate text fields for latitude and longitude.
    Split {
        lat_selector: String,
        lng_selector: String,
    },
}

impl CoordinateFieldLayout {
    pub const fn display_fields(&self) -> &'static [Field] {
        match self {
            Self::Combined { .. } => &[Field::LatLng],
            Self::Split { .. } => &[Field::Lat, Field::Lng],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub source_selector: String,
    pub address_selector: Option<String>,
    pub layout: CoordinateFieldLayout,
    pub zoom: f64,
    pub scroll_wheel_zoom: bool,
    pub srid: Srid,
    pub default_location: LatLng,
}

impl WidgetConfig {
    pub fn new(source_selector: impl Into<String>, layout: CoordinateFieldLayout) -> Self {
        Self {
            source_selector: source_selector.into(),
            address_selector: None,
            layout,
            zoom: DEFAULT_ZOOM,
            scroll_wheel_zoom: DEFAULT_SCROLL_WHEEL_ZOOM,
            srid: Srid::default(),
            default_location: DEFAULT_LOCATION,
        }
    }

    /// The CSS selector of a field, if configured.
    pub fn selector(&self, field: Field) -> Option<&str> {
        match (field, &self.layout) {
            (Field::Source, _) => Some(&self.source_selector),
            (Field::Address, _) => self.address_selector.as_deref(),
            (Field::LatLng, CoordinateFieldLayout::Combined { lat_lng_selector }) => {
                Some(lat_lng_selector)
            }
            (Field::Lat, CoordinateFieldLayout::Split { lat_selector, .. }) => Some(lat_selector),
            (Field::Lng, CoordinateFieldLayout::Split { lng_selector, .. }) => Some(lng_selector),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.default_location.is_valid() {
            return Err(Error::DefaultLocation(self.default_location));
        }
        if !self.zoom.is_finite() || self.zoom < 0.0 {
            return Err(Error::Zoom(self.zoom));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split() -> CoordinateFieldLayout {
        CoordinateFieldLayout::Split {
            lat_selector: "#lat".into(),
            lng_selector: "#lng".into(),
        }
    }

    #[test]
    fn defaults() {
        let cfg = WidgetConfig::new("#id_location", split());
        assert_eq!(7.0, cfg.zoom);
        assert_eq!(Srid::WGS84, cfg.srid);
        assert_eq!(LatLng::new(0.0, 0.0), cfg.default_location);
        assert!(cfg.scroll_wheel_zoom);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn selectors_follow_layout() {
        let mut cfg = WidgetConfig::new("#id_location", split());
        assert_eq!(Some("#id_location"), cfg.selector(Field::Source));
        assert_eq!(None, cfg.selector(Field::Address));
        assert_eq!(Some("#lat"), cfg.selector(Field::Lat));
        assert_eq!(Some("#lng"), cfg.selector(Field::Lng));
        assert_eq!(None, cfg.selector(Field::LatLng));

        cfg.address_selector = Some("#address".into());
        cfg.layout = CoordinateFieldLayout::Combined {
            lat_lng_selector: "#latlng".into(),
        };
        assert_eq!(Some("#address"), cfg.selector(Field::Address));
        assert_eq!(Some("#latlng"), cfg.selector(Field::LatLng));
        assert_eq!(None, cfg.selector(Field::Lat));
        assert_eq!(&[Field::LatLng], cfg.layout.display_fields());
    }

    #[test]
    fn reject_invalid_values() {
        let mut cfg = WidgetConfig::new("#id_location", split());
        cfg.default_location = LatLng::new(f64::NAN, 1.0);
        assert!(matches!(cfg.validate(), Err(Error::DefaultLocation(_))));
        cfg.default_location = LatLng::new(1.0, 1.0);
        cfg.zoom = -1.0;
        assert!(matches!(cfg.validate(), Err(Error::Zoom(_))));
    }
}
