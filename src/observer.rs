use crate::constants::{BUBBLE_SELECTOR, ROOT_MARGIN};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use watch_face_core::{
    apply_row_patch, row_patch, thresholds, FaceParams, IntersectionSample, Positioning,
    StyleTarget,
};
use web_sys as web;

/// Observer over the face's rows, firing on every 1/steps visibility change.
pub fn create_observer(
    root: &web::HtmlElement,
    params: &FaceParams,
) -> anyhow::Result<web::IntersectionObserver> {
    let steps: js_sys::Array = thresholds(params.threshold_steps)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let init = web::IntersectionObserverInit::new();
    init.set_root(Some(root.as_ref()));
    init.set_root_margin(ROOT_MARGIN);
    init.set_threshold(&steps);

    let positioning = params.positioning;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                match entry.dyn_into::<web::IntersectionObserverEntry>() {
                    Ok(entry) => update_row(&entry, positioning),
                    Err(e) => log::warn!("unexpected observer entry: {:?}", e),
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(observer)
}

fn sample_from_entry(entry: &web::IntersectionObserverEntry) -> IntersectionSample {
    IntersectionSample {
        ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
        element_top: entry.bounding_client_rect().top(),
        root_top: entry.root_bounds().map(|r| r.top()).unwrap_or(0.0),
    }
}

fn update_row(entry: &web::IntersectionObserverEntry, positioning: Positioning) {
    let sample = sample_from_entry(entry);
    let mut bubbles = row_bubbles(&entry.target());
    let patch = row_patch(&sample, bubbles.len(), positioning);
    let writes = apply_row_patch(&patch, &mut bubbles);
    log::trace!(
        "[observer] ratio={:.2} intersecting={} up={} writes={}",
        sample.ratio,
        sample.is_intersecting,
        sample.moving_up(),
        writes
    );
}

fn row_bubbles(row: &web::Element) -> Vec<BubbleStyle> {
    let Ok(list) = row.query_selector_all(BUBBLE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .map(BubbleStyle)
        .collect()
}

/// Inline style of one bubble element.
struct BubbleStyle(web::HtmlElement);

impl StyleTarget for BubbleStyle {
    fn transform(&self) -> String {
        self.0
            .style()
            .get_property_value("transform")
            .unwrap_or_default()
    }

    fn set_transform(&mut self, value: &str) {
        crate::dom::set_style(&self.0, "transform", value);
    }

    fn set_transform_origin(&mut self, value: &str) {
        crate::dom::set_style(&self.0, "transform-origin", value);
    }
}
