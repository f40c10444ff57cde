use crate::constants::{still_loading, DOM_READY_EVENT};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Register a parameterless listener that lives for the rest of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for `{}`: {:?}", event, e);
    }
    closure.forget();
}

/// Run `handler` once the document is parsed: right away if it already is,
/// otherwise on `DOMContentLoaded`.
pub fn on_document_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if !still_loading(&document.ready_state()) {
        handler();
        return;
    }
    let callback = Closure::once_into_js(handler);
    if let Err(e) =
        document.add_event_listener_with_callback(DOM_READY_EVENT, callback.unchecked_ref())
    {
        log::error!("failed to wait for document: {:?}", e);
    }
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

/// Set one inline style property; failures are logged, not returned.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}
