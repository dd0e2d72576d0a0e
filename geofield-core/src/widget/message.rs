const MESSAGE_ID_NAMESPACE: &str = "geofield";

/// Derives the class that tags all messages of a field.
pub fn message_id(field_dom_id: &str) -> String {
    format!("{MESSAGE_ID_NAMESPACE}__{field_dom_id}--warning")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Warning,
    Success,
}

impl MessageKind {
    pub const fn css_classes(self) -> &'static str {
        match self {
            Self::Warning => "help-block help-warning",
            Self::Success => "help-block help-info",
        }
    }
}

/// An inline message rendered as a paragraph right after a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    pub kind: MessageKind,
    pub text: String,
    pub id: String,
}

impl FieldMessage {
    pub fn class_name(&self) -> String {
        format!("{} {}", self.kind.css_classes(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names() {
        let msg = FieldMessage {
            kind: MessageKind::Warning,
            text: "Invalid coordinate value".into(),
            id: message_id("_id_location_latlng"),
        };
        assert_eq!(
            "help-block help-warning geofield___id_location_latlng--warning",
            msg.class_name()
        );
        let msg = FieldMessage {
            kind: MessageKind::Success,
            ..msg
        };
        assert_eq!(
            "help-block help-info geofield___id_location_latlng--warning",
            msg.class_name()
        );
    }
}
