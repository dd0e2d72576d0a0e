use leaflet::{
    DragEndEvent, LatLng as LeafletLatLng, Map, MapOptions, Marker, MarkerOptions, MouseEvent,
    TileLayer, TileLayerOptions, Zoom, ZoomOptions,
};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::HtmlElement;

use geofield_core::{entities::geo::LatLng, MapGateway, WidgetConfig};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const MAX_ZOOM: f64 = 19.0;
const ZOOM_CONTROL_POSITION: &str = "bottomleft";

/// A leaflet map with a single draggable marker.
pub struct LeafletMap {
    container: HtmlElement,
    map: Map,
    marker: Marker,
}

impl LeafletMap {
    pub fn new(container: &HtmlElement, config: &WidgetConfig) -> Self {
        let center = to_leaflet(config.default_location);

        let options = MapOptions::default();
        options.set_zoom(config.zoom);
        options.set_center(center.clone());
        options.set_scroll_wheel_zoom(config.scroll_wheel_zoom);
        options.set_zoom_control(false);
        let map = Map::new_with_element(container, &options);

        let zoom = Zoom::new(&ZoomOptions::default());
        zoom.set_position(ZOOM_CONTROL_POSITION);
        zoom.add_to(&map);

        let tile_options = TileLayerOptions::default();
        tile_options.set_max_zoom(MAX_ZOOM);
        tile_options.set_attribution(MAP_ATTRIBUTION.to_string());
        TileLayer::new_options(TILE_LAYER_URL, &tile_options).add_to(&map);

        let marker_options = MarkerOptions::new();
        marker_options.set_draggable(true);
        let marker = Marker::new_with_options(&center, &marker_options);
        marker.add_to(&map);

        Self {
            container: container.clone(),
            map,
            marker,
        }
    }

    pub fn on_marker_drag_end(&self, handler: impl Fn(LatLng) + 'static) {
        let marker = self.marker.clone();
        let closure = Closure::wrap(Box::new(move |_: DragEndEvent| {
            handler(from_leaflet(&marker.get_lat_lng()));
        }) as Box<dyn FnMut(DragEndEvent)>);
        self.marker.on("dragend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn on_click(&self, handler: impl Fn(LatLng) + 'static) {
        let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
            handler(from_leaflet(&ev.lat_lng()));
        }) as Box<dyn FnMut(MouseEvent)>);
        self.map.on("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl MapGateway for LeafletMap {
    fn set_marker_position(&self, pos: LatLng) {
        self.marker.set_lat_lng(&to_leaflet(pos));
    }

    fn set_view_center(&self, pos: LatLng) {
        self.map.set_view(&to_leaflet(pos), self.map.get_zoom());
    }

    // Same rule as jQuery's `:visible`.
    fn is_container_visible(&self) -> bool {
        self.container.offset_width() > 0
            || self.container.offset_height() > 0
            || self.container.get_client_rects().length() > 0
    }
}

fn to_leaflet(pos: LatLng) -> LeafletLatLng {
    LeafletLatLng::new(pos.lat, pos.lng)
}

fn from_leaflet(pos: &LeafletLatLng) -> LatLng {
    LatLng::new(pos.lat(), pos.lng())
}
