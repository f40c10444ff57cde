#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod face;
mod observer;

fn wire_resize(window: &web::Window, face: Rc<face::WatchFace>) {
    // No debouncing: every resize event recomputes the full size
    dom::add_listener(window, constants::RESIZE_EVENT, move || {
        face.resize();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("watch-face starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_document_ready(&document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let face = Rc::new(face::WatchFace::new(&document)?);
    let rows = face.build_rows(&document)?;
    let size = face.resize();
    log::info!(
        "[face] {} bubbles in {} rows, positioning={}, size={:.0}x{:.0}",
        face.params().bubble_count,
        rows,
        face.params().positioning,
        size.width,
        size.height
    );

    wire_resize(&window, face);
    Ok(())
}
