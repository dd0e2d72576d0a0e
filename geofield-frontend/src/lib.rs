//! Binds geo field widgets to leaflet maps in the browser.

use anyhow::{anyhow, Result};
use leptos::document;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Element, HtmlElement};

use geofield_boundary::GeoFieldData;
use geofield_core::WidgetConfig;

mod fields;
mod map;
mod timers;
mod widget;

const GEO_FIELD_CLASS: &str = "geo-field";
const CONFIG_ATTRIBUTE: &str = "data-geo-field";
const INIT_ATTRIBUTE: &str = "data-geo-init";

/// Initializes every `.geo-field` element of the page
/// that has not been initialized yet.
#[wasm_bindgen(js_name = initGeoFields)]
pub fn init_geo_fields() {
    let collection = document().get_elements_by_class_name(GEO_FIELD_CLASS);
    // Collect first: the collection is live.
    let elements: Vec<Element> = (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect();
    log::debug!("Found {} geo field elements", elements.len());
    for element in elements {
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        if is_initialized(&element) {
            continue;
        }
        let Some(json) = element.get_attribute(CONFIG_ATTRIBUTE) else {
            log::warn!("Geo field element without '{CONFIG_ATTRIBUTE}' attribute");
            continue;
        };
        if let Err(err) = init(&element, &json) {
            log::error!("Unable to initialize geo field: {err:#}");
        }
    }
}

/// Initializes a single map element with an explicit JSON configuration,
/// e.g. for blocks that are added to the page later on.
#[wasm_bindgen(js_name = initGeoField)]
pub fn init_geo_field(element: HtmlElement, config_json: &str) -> Result<(), JsValue> {
    init(&element, config_json).map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

fn is_initialized(element: &HtmlElement) -> bool {
    element.has_attribute(INIT_ATTRIBUTE)
}

fn init(element: &HtmlElement, json: &str) -> Result<()> {
    if is_initialized(element) {
        log::debug!("Geo field is already initialized");
        return Ok(());
    }
    let mut data: GeoFieldData = serde_json::from_str(json)?;
    if let Some(source) = fields::query_input(&data.source_selector)? {
        data.merge_source_value(&source.value())?;
    }
    let config = WidgetConfig::try_from(data)?;
    widget::mount(element, config)?;
    element
        .set_attribute(INIT_ATTRIBUTE, "true")
        .map_err(|err| anyhow!("Unable to mark geo field as initialized: {err:?}"))?;
    Ok(())
}
