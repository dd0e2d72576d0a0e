use std::{collections::HashMap, time::Duration};

use crate::{
    entities::{
        geo::{parse_combined_lat_lng, parse_split_lat_lng, LatLng},
        location::Location,
    },
    gateways::{FieldGateway, MapGateway, Timer, TimerGateway},
};

pub mod config;
pub mod error;
pub mod message;


use self::{
    config::{CoordinateFieldLayout, WidgetConfig},
    error::Error,
    message::{message_id, FieldMessage, MessageKind},
};

pub const VISIBILITY_CHECK_INTERVAL: Duration = Duration::from_millis(1_000);
pub const SUCCESS_MESSAGE_TIMEOUT: Duration = Duration::from_millis(3_000);
pub const INVALID_COORDINATE_MESSAGE: &str = "Invalid coordinate value";

/// The form inputs a widget is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Hidden input holding the serialized location.
    Source,
    Address,
    /// Combined `<lat>,<lng>` display field.
    LatLng,
    Lat,
    Lng,
}

/// Validation state of a coordinate display field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// Keeps map marker, hidden source field and display fields consistent.
///
/// The widget is driven by the event handlers of its host:
/// [`on_marker_drag_end`](Self::on_marker_drag_end),
/// [`on_map_click`](Self::on_map_click),
/// [`on_display_input`](Self::on_display_input) and
/// [`on_timer`](Self::on_timer).
pub struct GeoFieldWidget<M, F, T>
where
    T: TimerGateway,
{
    config: WidgetConfig,
    map: M,
    fields: F,
    timers: T,
    position: LatLng,
    field_states: HashMap<Field, FieldState>,
    success_timeout: Option<T::Handle>,
    visibility_check: Option<T::Handle>,
}

impl<M, F, T> GeoFieldWidget<M, F, T>
where
    M: MapGateway,
    F: FieldGateway,
    T: TimerGateway,
{
    pub fn new(config: WidgetConfig, map: M, fields: F, timers: T) -> Result<Self, Error> {
        config.validate()?;
        let position = config.default_location;
        Ok(Self {
            config,
            map,
            fields,
            timers,
            position,
            field_states: HashMap::new(),
            success_timeout: None,
            visibility_check: None,
        })
    }

    /// Moves map and display fields to the default location
    /// and starts waiting for the map container to become visible.
    ///
    /// The hidden source field is not touched: it keeps the
    /// value the form was rendered with.
    pub fn init(&mut self) {
        let pos = self.config.default_location;
        log::debug!("Initialize geo field widget at {pos}");
        self.set_map_position(pos);
        self.update_display_fields(pos);
        for field in self.config.layout.display_fields() {
            self.field_states.insert(*field, FieldState::Valid);
        }
        self.start_visibility_check();
    }

    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub const fn map(&self) -> &M {
        &self.map
    }

    pub const fn fields(&self) -> &F {
        &self.fields
    }

    pub const fn timers(&self) -> &T {
        &self.timers
    }

    /// The current marker position.
    pub const fn position(&self) -> LatLng {
        self.position
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        self.field_states.get(&field).copied().unwrap_or_default()
    }

    pub const fn is_waiting_for_visibility(&self) -> bool {
        self.visibility_check.is_some()
    }

    // -- event handlers -- //

    pub fn on_marker_drag_end(&mut self, pos: LatLng) {
        log::debug!("Marker dragged to {pos}");
        self.apply_map_position(pos);
    }

    pub fn on_map_click(&mut self, pos: LatLng) {
        log::debug!("Map clicked at {pos}");
        self.apply_map_position(pos);
    }

    /// Handles manual edits of a coordinate display field.
    pub fn on_display_input(&mut self, field: Field) {
        if !self.config.layout.display_fields().contains(&field) {
            log::warn!("Ignore input of {field:?}: not a coordinate display field");
            return;
        }
        let value = |f| self.fields.value(f).unwrap_or_default();
        let (valid, pos) = match self.config.layout {
            CoordinateFieldLayout::Combined { .. } => {
                let pos = parse_combined_lat_lng(&value(Field::LatLng));
                (pos.is_some(), pos)
            }
            CoordinateFieldLayout::Split { .. } => {
                let partial = parse_split_lat_lng(&value(Field::Lat), &value(Field::Lng));
                let valid = match field {
                    Field::Lat => partial.lat.is_some(),
                    _ => partial.lng.is_some(),
                };
                (valid, partial.complete())
            }
        };
        if !valid {
            log::debug!("Reject invalid input of {field:?}");
            self.field_states.insert(field, FieldState::Invalid);
            self.display_warning(INVALID_COORDINATE_MESSAGE, field);
            return;
        }
        self.field_states.insert(field, FieldState::Valid);
        self.clear_field_message(field);
        let Some(pos) = pos else {
            // The other component is still invalid.
            return;
        };
        self.set_map_position(pos);
        self.write_location(pos);
    }

    pub fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::VisibilityCheck => {
                self.check_visibility();
            }
            Timer::ClearSuccessMessage(field) => {
                self.success_timeout = None;
                self.clear_field_message(field);
            }
        }
    }

    // -- operations -- //

    /// Moves the marker and centers the map view.
    pub fn set_map_position(&mut self, pos: LatLng) {
        self.map.set_marker_position(pos);
        self.map.set_view_center(pos);
        self.position = pos;
    }

    pub fn update_display_fields(&self, pos: LatLng) {
        match self.config.layout {
            CoordinateFieldLayout::Combined { .. } => {
                self.fields.set_value(Field::LatLng, &pos.to_string());
            }
            CoordinateFieldLayout::Split { .. } => {
                self.fields.set_value(Field::Lat, &pos.lat.to_string());
                self.fields.set_value(Field::Lng, &pos.lng.to_string());
            }
        }
    }

    /// Writes the serialized location into the hidden source field.
    pub fn write_location(&self, pos: LatLng) {
        let location = Location::new(self.config.srid, pos);
        self.fields.set_value(Field::Source, &location.to_string());
    }

    /// Parses the current content of the display field(s).
    pub fn display_position(&self) -> Option<LatLng> {
        let value = |f| self.fields.value(f).unwrap_or_default();
        match self.config.layout {
            CoordinateFieldLayout::Combined { .. } => parse_combined_lat_lng(&value(Field::LatLng)),
            CoordinateFieldLayout::Split { .. } => {
                parse_split_lat_lng(&value(Field::Lat), &value(Field::Lng)).complete()
            }
        }
    }

    pub fn display_warning(&self, text: &str, field: Field) {
        self.display_message(MessageKind::Warning, text, field);
    }

    /// Shows a message that disappears after [`SUCCESS_MESSAGE_TIMEOUT`].
    pub fn display_success(&mut self, text: &str, field: Field) {
        if let Some(handle) = self.success_timeout.take() {
            self.timers.cancel(handle);
        }
        if !self.display_message(MessageKind::Success, text, field) {
            return;
        }
        let handle = self
            .timers
            .start_timeout(Timer::ClearSuccessMessage(field), SUCCESS_MESSAGE_TIMEOUT);
        self.success_timeout = Some(handle);
    }

    pub fn clear_field_message(&self, field: Field) {
        let Some(dom_id) = self.fields.dom_id(field) else {
            return;
        };
        self.fields.remove_messages(&message_id(&dom_id));
    }

    pub fn clear_all_messages(&self) {
        self.clear_field_message(Field::Address);
        for field in self.config.layout.display_fields() {
            self.clear_field_message(*field);
        }
    }

    /// Cancels all pending timers.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.visibility_check.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = self.success_timeout.take() {
            self.timers.cancel(handle);
        }
    }

    // -- internals -- //

    fn apply_map_position(&mut self, pos: LatLng) {
        self.set_map_position(pos);
        self.update_display_fields(pos);
        self.write_location(pos);
        for field in self.config.layout.display_fields() {
            self.field_states.insert(*field, FieldState::Valid);
        }
        self.clear_all_messages();
    }

    /// Returns `false` if the field is absent.
    fn display_message(&self, kind: MessageKind, text: &str, field: Field) -> bool {
        let Some(dom_id) = self.fields.dom_id(field) else {
            log::debug!("Unable to show message: {field:?} is absent");
            return false;
        };
        let message = FieldMessage {
            kind,
            text: text.to_string(),
            id: message_id(&dom_id),
        };
        self.fields.remove_messages(&message.id);
        self.fields.insert_message_after(field, &message);
        true
    }

    fn start_visibility_check(&mut self) {
        if self.visibility_check.is_some() {
            return;
        }
        let handle = self
            .timers
            .start_interval(Timer::VisibilityCheck, VISIBILITY_CHECK_INTERVAL);
        self.visibility_check = Some(handle);
    }

    fn check_visibility(&mut self) {
        if !self.map.is_container_visible() {
            return;
        }
        if let Some(handle) = self.visibility_check.take() {
            self.timers.cancel(handle);
        }
        log::debug!("Map container is visible");
        if let Some(pos) = self.display_position() {
            self.set_map_position(pos);
        }
    }
}
