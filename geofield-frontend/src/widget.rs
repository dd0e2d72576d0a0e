use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use anyhow::{anyhow, Result};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, HtmlElement};

use geofield_core::{GeoFieldWidget, WidgetConfig};

use crate::{fields::DomFields, map::LeafletMap, timers::BrowserTimers};

pub type WebWidget = GeoFieldWidget<LeafletMap, DomFields, BrowserTimers>;

/// Builds the map inside `container` and binds it to the configured fields.
///
/// The widget stays alive as long as the page: the event listeners own it.
pub fn mount(container: &HtmlElement, config: WidgetConfig) -> Result<()> {
    let fields = DomFields::query(&config)?;
    let map = LeafletMap::new(container, &config);
    let widget = GeoFieldWidget::new(config, map, fields, BrowserTimers::default())?;
    let widget = Rc::new(RefCell::new(widget));
    widget.borrow().timers().bind(&widget);
    listen(&widget)?;
    widget.borrow_mut().init();
    Ok(())
}

fn listen(widget: &Rc<RefCell<WebWidget>>) -> Result<()> {
    let w = widget.borrow();

    let on_drag_end = Rc::clone(widget);
    w.map().on_marker_drag_end(move |pos| {
        with_widget(&on_drag_end, |w| w.on_marker_drag_end(pos));
    });

    let on_click = Rc::clone(widget);
    w.map().on_click(move |pos| {
        with_widget(&on_click, |w| w.on_map_click(pos));
    });

    for &field in w.config().layout.display_fields() {
        let Some(input) = w.fields().input(field) else {
            continue;
        };
        let on_input = Rc::clone(widget);
        let closure = Closure::wrap(Box::new(move |_: Event| {
            with_widget(&on_input, |w| w.on_display_input(field));
        }) as Box<dyn FnMut(Event)>);
        input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(|err| anyhow!("Unable to listen to {field:?}: {err:?}"))?;
        closure.forget();
    }
    Ok(())
}

pub fn dispatch(widget: &Weak<RefCell<WebWidget>>, f: impl FnOnce(&mut WebWidget)) {
    match widget.upgrade() {
        Some(widget) => with_widget(&widget, f),
        None => log::debug!("Widget is gone"),
    }
}

fn with_widget(widget: &RefCell<WebWidget>, f: impl FnOnce(&mut WebWidget)) {
    match widget.try_borrow_mut() {
        Ok(mut w) => f(&mut w),
        Err(_) => log::warn!("Widget is busy, event dropped"),
    }
}
