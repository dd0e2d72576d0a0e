//! # geofield-core
//!
//! Keeps a map marker, a hidden location field and the human-editable
//! coordinate fields of a form mutually consistent.
//!
//! The DOM, the map library and the browser timers are reached
//! through the traits in [`gateways`], so the widget runs unchanged
//! in the browser and in tests.

#[macro_use]
extern crate lazy_static;

pub mod gateways;
pub mod util;
pub mod widget;

pub use geofield_entities as entities;

pub use self::{
    gateways::*,
    widget::{
        config::{CoordinateFieldLayout, WidgetConfig},
        error::Error,
        message::{FieldMessage, MessageKind},
        Field, FieldState, GeoFieldWidget,
    },
};
