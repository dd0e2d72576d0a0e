use super::*;
use geofield_core::{
    self as gf,
    entities::{
        geo::{parse_degrees, LatLng},
        location::{LocationParseError, LocationStruct, RawLatLng, Srid, SridParseError},
    },
    util::location::location_string_to_struct,
    CoordinateFieldLayout, WidgetConfig,
};

impl GeoFieldData {
    /// Applies a value already present in the hidden source field
    /// over the configured SRID and default location.
    ///
    /// An empty value leaves the configuration unchanged.
    pub fn merge_source_value(&mut self, value: &str) -> Result<(), LocationParseError> {
        let Some(LocationStruct {
            srid,
            default_location: RawLatLng { lat, lng },
        }) = location_string_to_struct(value)?
        else {
            return Ok(());
        };
        log::debug!("Use location of source field: {value}");
        self.srid = Some(srid.into());
        self.default_location = Some(DefaultLocation {
            lat: lat.into(),
            lng: lng.into(),
        });
        Ok(())
    }
}

fn srid_from_value(value: NumericValue) -> Result<Srid, SridParseError> {
    match value {
        NumericValue::Number(n) => {
            if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
                Ok(Srid::new(n as u32))
            } else {
                Err(SridParseError(n.to_string()))
            }
        }
        NumericValue::Text(s) => s.parse(),
    }
}

fn degrees_from_value(value: NumericValue) -> Result<f64, String> {
    match value {
        NumericValue::Number(n) => Ok(n),
        NumericValue::Text(s) => parse_degrees(&s).ok_or(s),
    }
}

impl TryFrom<DefaultLocation> for LatLng {
    type Error = LocationParseError;
    fn try_from(from: DefaultLocation) -> Result<Self, Self::Error> {
        let DefaultLocation { lat, lng } = from;
        let lat = degrees_from_value(lat).map_err(LocationParseError::Lat)?;
        let lng = degrees_from_value(lng).map_err(LocationParseError::Lng)?;
        Ok(LatLng::new(lat, lng))
    }
}

impl TryFrom<GeoFieldData> for WidgetConfig {
    type Error = gf::Error;
    fn try_from(from: GeoFieldData) -> Result<Self, Self::Error> {
        let GeoFieldData {
            source_selector,
            address_selector,
            lat_lng_display_selector,
            lat_display_selector,
            lng_display_selector,
            zoom,
            scroll_wheel_zoom,
            srid,
            default_location,
            used_in: _,
            in_react_streamfield: _,
        } = from;

        let layout = match (
            lat_lng_display_selector,
            lat_display_selector,
            lng_display_selector,
        ) {
            (Some(lat_lng_selector), None, None) => {
                CoordinateFieldLayout::Combined { lat_lng_selector }
            }
            (None, Some(lat_selector), Some(lng_selector)) => CoordinateFieldLayout::Split {
                lat_selector,
                lng_selector,
            },
            (Some(_), _, _) => return Err(gf::Error::AmbiguousDisplayFields),
            (None, _, _) => return Err(gf::Error::MissingDisplayField),
        };

        let mut config = WidgetConfig::new(source_selector, layout);
        config.address_selector = address_selector;
        if let Some(zoom) = zoom {
            config.zoom = zoom;
        }
        if let Some(scroll_wheel_zoom) = scroll_wheel_zoom {
            config.scroll_wheel_zoom = scroll_wheel_zoom;
        }
        if let Some(srid) = srid {
            config.srid = srid_from_value(srid).map_err(LocationParseError::from)?;
        }
        if let Some(default_location) = default_location {
            config.default_location = default_location.try_into()?;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combined_data() -> GeoFieldData {
        GeoFieldData {
            source_selector: "#id_location".into(),
            address_selector: None,
            lat_lng_display_selector: Some("#_id_location_latlng".into()),
            lat_display_selector: None,
            lng_display_selector: None,
            zoom: None,
            scroll_wheel_zoom: None,
            srid: None,
            default_location: None,
            used_in: Some("GeoField".into()),
            in_react_streamfield: false,
        }
    }

    #[test]
    fn convert_with_defaults() {
        let cfg = WidgetConfig::try_from(combined_data()).unwrap();
        assert_eq!(
            CoordinateFieldLayout::Combined {
                lat_lng_selector: "#_id_location_latlng".into()
            },
            cfg.layout
        );
        assert_eq!(7.0, cfg.zoom);
        assert_eq!(Srid::WGS84, cfg.srid);
        assert_eq!(LatLng::new(0.0, 0.0), cfg.default_location);
        assert!(cfg.scroll_wheel_zoom);
    }

    #[test]
    fn convert_split_layout() {
        let data = GeoFieldData {
            lat_lng_display_selector: None,
            lat_display_selector: Some("#lat".into()),
            lng_display_selector: Some("#lng".into()),
            address_selector: Some("#address".into()),
            zoom: Some(12.0),
            scroll_wheel_zoom: Some(false),
            srid: Some(NumericValue::Number(3857.0)),
            default_location: Some(DefaultLocation {
                lat: "48.7755".to_string().into(),
                lng: 9.1827.into(),
            }),
            ..combined_data()
        };
        let cfg = WidgetConfig::try_from(data).unwrap();
        assert_eq!(
            CoordinateFieldLayout::Split {
                lat_selector: "#lat".into(),
                lng_selector: "#lng".into(),
            },
            cfg.layout
        );
        assert_eq!(Some("#address"), cfg.address_selector.as_deref());
        assert_eq!(12.0, cfg.zoom);
        assert!(!cfg.scroll_wheel_zoom);
        assert_eq!(Srid::new(3857), cfg.srid);
        assert_eq!(LatLng::new(48.7755, 9.1827), cfg.default_location);
    }

    #[test]
    fn reject_missing_or_ambiguous_display_fields() {
        let data = GeoFieldData {
            lat_lng_display_selector: None,
            ..combined_data()
        };
        assert!(matches!(
            WidgetConfig::try_from(data),
            Err(gf::Error::MissingDisplayField)
        ));
        let data = GeoFieldData {
            lat_lng_display_selector: None,
            lat_display_selector: Some("#lat".into()),
            ..combined_data()
        };
        assert!(matches!(
            WidgetConfig::try_from(data),
            Err(gf::Error::MissingDisplayField)
        ));
        let data = GeoFieldData {
            lat_display_selector: Some("#lat".into()),
            lng_display_selector: Some("#lng".into()),
            ..combined_data()
        };
        assert!(matches!(
            WidgetConfig::try_from(data),
            Err(gf::Error::AmbiguousDisplayFields)
        ));
    }

    #[test]
    fn reject_invalid_numbers() {
        let data = GeoFieldData {
            srid: Some(NumericValue::Number(43.5)),
            ..combined_data()
        };
        assert!(matches!(
            WidgetConfig::try_from(data),
            Err(gf::Error::UnparseableLocation(LocationParseError::Srid(_)))
        ));
        let data = GeoFieldData {
            default_location: Some(DefaultLocation {
                lat: "north".to_string().into(),
                lng: 1.0.into(),
            }),
            ..combined_data()
        };
        assert!(matches!(
            WidgetConfig::try_from(data),
            Err(gf::Error::UnparseableLocation(LocationParseError::Lat(_)))
        ));
    }

    #[test]
    fn merge_source_value_over_defaults() {
        let mut data = combined_data();
        data.merge_source_value("SRID=4326;POINT(18.0685808 59.3293235)")
            .unwrap();
        assert_eq!(Some(NumericValue::Text("4326".into())), data.srid);
        let cfg = WidgetConfig::try_from(data).unwrap();
        assert_eq!(LatLng::new(59.3293235, 18.0685808), cfg.default_location);
    }

    #[test]
    fn merge_empty_source_value() {
        let mut data = combined_data();
        data.merge_source_value("").unwrap();
        assert_eq!(combined_data(), data);
    }

    #[test]
    fn merge_unparseable_source_value() {
        let mut data = combined_data();
        assert_eq!(
            Err(LocationParseError::Unparseable("POINT(1 2)".into())),
            data.merge_source_value("POINT(1 2)")
        );
        assert_eq!(combined_data(), data);
    }
}
