use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Object, Reflect};
use log::{debug, error, info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::funnel::sink::{AttributionSink, Delivery, RetryPolicy, TagApi};
use crate::funnel::tags::AttributionTags;

const RGBA_TAGS: &str = "_rgba_tags";
const RINGBA: &str = "Ringba";

#[derive(Debug, Error)]
pub enum TagError {
    #[error("window is not available")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for TagError {
    fn from(value: JsValue) -> Self {
        TagError::Js(format!("{:?}", value))
    }
}

/// Mirrors tags into `window._rgba_tags` and, when the call-tracking script
/// has loaded, into `window.Ringba` directly.
#[derive(Clone, Copy, Debug)]
pub struct RingbaSink {
    policy: RetryPolicy,
}

impl RingbaSink {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    fn deliver(&self, tags: &AttributionTags, delivery: Delivery) {
        if tags.is_empty() {
            return;
        }
        push_all(tags);
        match ringba() {
            Some(tracker) => set_all(&tracker, tags),
            None if self.policy.waits_for_tracker(delivery) => {
                retry_until_loaded(Rc::new(tags.clone()), self.policy, 1)
            }
            None => debug!("Ringba not loaded, {} tags left in _rgba_tags", tags.len()),
        }
    }
}

impl AttributionSink for RingbaSink {
    fn record(&self, tags: &AttributionTags) {
        self.deliver(tags, Delivery::Initial);
    }

    fn resend(&self, tags: &AttributionTags) {
        self.deliver(tags, Delivery::Repeat);
    }
}

fn push_all(tags: &AttributionTags) {
    for (key, value) in tags.iter() {
        match push_rgba_tag(key, value) {
            Ok(()) => info!("_rgba_tags push: {}={}", key, value),
            Err(e) => error!("_rgba_tags push error: {}", e),
        }
    }
}

/// Only the direct Ringba calls are retried, `_rgba_tags` already has the entries.
fn retry_until_loaded(tags: Rc<AttributionTags>, policy: RetryPolicy, attempt: u32) {
    if !policy.should_retry(attempt) {
        warn!(
            "Ringba not found after {} ms, _rgba_tags still pushed",
            policy.give_up_after_ms()
        );
        return;
    }
    Timeout::new(policy.interval_ms, move || match ringba() {
        Some(tracker) => set_all(&tracker, &tags),
        None => retry_until_loaded(tags, policy, attempt + 1),
    })
    .forget();
}

/// Dumps the current `_rgba_tags` queue to the console.
pub fn log_queue() {
    if let Some(window) = web_sys::window() {
        if let Ok(queue) = Reflect::get(&window, &JsValue::from_str(RGBA_TAGS)) {
            gloo_console::log!("Current _rgba_tags:", queue);
        }
    }
}

fn set_all(tracker: &JsValue, tags: &AttributionTags) {
    for (key, value) in tags.iter() {
        if let Err(e) = set_tag(tracker, key, value) {
            error!("Ringba API set error for {}: {}", key, e);
        }
    }
}

fn ringba() -> Option<JsValue> {
    let window = web_sys::window()?;
    let tracker = Reflect::get(&window, &JsValue::from_str(RINGBA)).ok()?;
    if tracker.is_undefined() || tracker.is_null() {
        None
    } else {
        Some(tracker)
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn push_rgba_tag(key: &str, value: &str) -> Result<(), TagError> {
    let window = web_sys::window().ok_or(TagError::NoWindow)?;
    let mut queue = Reflect::get(&window, &JsValue::from_str(RGBA_TAGS))?;
    if queue.is_undefined() || queue.is_null() {
        queue = Array::new().into();
        Reflect::set(&window, &JsValue::from_str(RGBA_TAGS), &queue)?;
    }
    let entry = Object::new();
    Reflect::set(&entry, &JsValue::from_str(key), &JsValue::from_str(value))?;
    // the tracker replaces push once it loads
    let push = method(&queue, "push").ok_or_else(|| TagError::Js(format!("{} has no push", RGBA_TAGS)))?;
    push.call1(&queue, &entry)?;
    Ok(())
}

fn set_tag(tracker: &JsValue, key: &str, value: &str) -> Result<TagApi, TagError> {
    let set_tag = method(tracker, "setTag");
    let add_tag = method(tracker, "addTag");
    let push = method(tracker, "push");
    let api = TagApi::choose(set_tag.is_some(), add_tag.is_some(), push.is_some());
    let (key_js, value_js) = (JsValue::from_str(key), JsValue::from_str(value));

    match (api, set_tag.or(add_tag), push) {
        (TagApi::SetTag | TagApi::AddTag, Some(f), _) => {
            f.call2(tracker, &key_js, &value_js)?;
        }
        (TagApi::Push, _, Some(f)) => {
            let command = Array::of3(&JsValue::from_str("setTag"), &key_js, &value_js);
            f.call1(tracker, &command)?;
        }
        _ => {
            let mut tags = Reflect::get(tracker, &JsValue::from_str("tags"))?;
            if !tags.is_object() {
                tags = Object::new().into();
                Reflect::set(tracker, &JsValue::from_str("tags"), &tags)?;
            }
            Reflect::set(&tags, &key_js, &value_js)?;
        }
    }
    Ok(api)
}
