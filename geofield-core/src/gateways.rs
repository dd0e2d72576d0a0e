use std::time::Duration;

use crate::{
    entities::geo::LatLng,
    widget::{message::FieldMessage, Field},
};

pub trait MapGateway {
    fn set_marker_position(&self, pos: LatLng);
    fn set_view_center(&self, pos: LatLng);
    fn is_container_visible(&self) -> bool;
}

/// Access to the form inputs a widget is bound to.
///
/// Fields that are not configured or not present in
/// the document are reported as `None` and ignored on write.
pub trait FieldGateway {
    /// The DOM id of the field or `None` if the field is absent.
    fn dom_id(&self, field: Field) -> Option<String>;
    fn value(&self, field: Field) -> Option<String>;
    fn set_value(&self, field: Field, value: &str);
    /// Inserts the message node directly after the field.
    fn insert_message_after(&self, field: Field, message: &FieldMessage);
    /// Removes all message nodes tagged with `message_id`.
    fn remove_messages(&self, message_id: &str);
}

/// Timers a widget can request.
///
/// The gateway must report an elapsed timer back through
/// [`GeoFieldWidget::on_timer`](crate::GeoFieldWidget::on_timer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    VisibilityCheck,
    ClearSuccessMessage(Field),
}

pub trait TimerGateway {
    type Handle;
    fn start_timeout(&self, timer: Timer, delay: Duration) -> Self::Handle;
    fn start_interval(&self, timer: Timer, period: Duration) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}
