use leptos::*;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start geo field widgets");
    if document().ready_state() == "complete" {
        geofield_frontend::init_geo_fields();
    } else {
        _ = window_event_listener(ev::load, |_| geofield_frontend::init_geo_fields());
    }
}
