use js_sys::{Function, Reflect};
use log::{debug, error};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, UrlSearchParams};

use crate::funnel::events::LeadEvent;
use crate::funnel::utm::UtmParams;

/// Calls `window.trackEvent(name, props)` when the page embeds one. Silent otherwise.
pub fn track_event<P: Serialize>(name: &str, props: &P) {
    let Some(window) = window() else {
        return;
    };
    let track = match Reflect::get(&window, &JsValue::from_str("trackEvent")) {
        Ok(value) => match value.dyn_into::<Function>() {
            Ok(f) => f,
            Err(_) => {
                debug!("trackEvent not present, skipping {}", name);
                return;
            }
        },
        Err(_) => return,
    };
    // plain objects, not ES Maps
    let props = match props.serialize(&Serializer::json_compatible()) {
        Ok(props) => props,
        Err(e) => {
            error!("Failed to serialize {} event: {}", name, e);
            return;
        }
    };
    if let Err(e) = track.call2(&window, &JsValue::from_str(name), &props) {
        error!("trackEvent({}) threw: {:?}", name, e);
    }
}

pub fn track(event: &LeadEvent) {
    track_event(event.name(), &event.props());
}

/// Campaign parameters of the current URL.
pub fn current_utm() -> UtmParams {
    let params = window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok());
    match params {
        Some(params) => UtmParams::from_lookup(|key| params.get(key)),
        None => UtmParams::default(),
    }
}

/// Hands off to the dialer.
pub fn dial(href: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(href) {
            error!("Failed to open {}: {:?}", href, e);
        }
    }
}
