use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};
use leptos::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use geofield_core::{Field, FieldGateway, FieldMessage, WidgetConfig};

const ALL_FIELDS: [Field; 5] = [
    Field::Source,
    Field::Address,
    Field::LatLng,
    Field::Lat,
    Field::Lng,
];

/// The input elements of a widget, resolved once from the configured selectors.
pub struct DomFields {
    inputs: HashMap<Field, HtmlInputElement>,
}

impl DomFields {
    pub fn query(config: &WidgetConfig) -> Result<Self> {
        let mut inputs = HashMap::new();
        for field in ALL_FIELDS {
            let Some(selector) = config.selector(field) else {
                continue;
            };
            match query_input(selector)? {
                Some(input) => {
                    inputs.insert(field, input);
                }
                None if field == Field::Source => {
                    bail!("Source field '{selector}' not found");
                }
                None => {
                    log::warn!("{field:?} field '{selector}' not found");
                }
            }
        }
        Ok(Self { inputs })
    }

    pub fn input(&self, field: Field) -> Option<&HtmlInputElement> {
        self.inputs.get(&field)
    }
}

pub fn query_input(selector: &str) -> Result<Option<HtmlInputElement>> {
    let element = document()
        .query_selector(selector)
        .map_err(|err| anyhow!("Invalid selector '{selector}': {err:?}"))?;
    element
        .map(|el| {
            el.dyn_into::<HtmlInputElement>()
                .map_err(|_| anyhow!("'{selector}' is not an input element"))
        })
        .transpose()
}

impl FieldGateway for DomFields {
    fn dom_id(&self, field: Field) -> Option<String> {
        self.input(field)
            .map(|input| input.id())
            .filter(|id| !id.is_empty())
    }

    fn value(&self, field: Field) -> Option<String> {
        self.input(field).map(HtmlInputElement::value)
    }

    fn set_value(&self, field: Field, value: &str) {
        if let Some(input) = self.input(field) {
            input.set_value(value);
        }
    }

    fn insert_message_after(&self, field: Field, message: &FieldMessage) {
        let Some(input) = self.input(field) else {
            return;
        };
        let paragraph = match document().create_element("p") {
            Ok(p) => p,
            Err(err) => {
                log::error!("Unable to create message element: {err:?}");
                return;
            }
        };
        paragraph.set_class_name(&message.class_name());
        paragraph.set_text_content(Some(&message.text));
        if let Err(err) = input.insert_adjacent_element("afterend", &paragraph) {
            log::error!("Unable to insert message after {field:?}: {err:?}");
        }
    }

    fn remove_messages(&self, message_id: &str) {
        // live collection
        let messages = document().get_elements_by_class_name(message_id);
        while let Some(message) = messages.item(0) {
            message.remove();
        }
    }
}
