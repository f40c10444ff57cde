// DOM hooks and event names used by the web frontend.

// Elements
pub const FACE_ELEMENT_ID: &str = "watchFace";
pub const ROW_CLASS: &str = "row";
pub const BUBBLE_CLASS: &str = "bubble";
pub const BUBBLE_SELECTOR: &str = ".bubble";

// Face overrides are read from `data-<key>` attributes on the face element
pub const OVERRIDE_ATTR_PREFIX: &str = "data-";

// Observer
pub const ROOT_MARGIN: &str = "0px";

// Events
pub const RESIZE_EVENT: &str = "resize";
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";
pub const READY_STATE_LOADING: &str = "loading";

/// `document.readyState` before the document is parsed.
#[inline]
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// Class list for a row, e.g. `row row--3`.
#[inline]
pub fn row_class(nominal: usize) -> String {
    format!("{ROW_CLASS} {ROW_CLASS}--{nominal}")
}

#[inline]
pub fn override_attr(key: &str) -> String {
    format!("{OVERRIDE_ATTR_PREFIX}{key}")
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
