use crate::constants::{override_attr, px, row_class, BUBBLE_CLASS, FACE_ELEMENT_ID};
use crate::dom;
use crate::observer;
use wasm_bindgen::JsCast;
use watch_face_core::{
    fit_face, partition_rows, random_color, FaceParams, FaceSize, OVERRIDE_KEYS,
};
use web_sys as web;

/// Everything the face needs after startup: the elements it writes to, the
/// observer tracking its rows, and the parameters it was built with.
pub struct WatchFace {
    body: web::HtmlElement,
    face: web::HtmlElement,
    observer: web::IntersectionObserver,
    params: FaceParams,
}

impl WatchFace {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        let face = document
            .get_element_by_id(FACE_ELEMENT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", FACE_ELEMENT_ID))?;
        let params = read_params(&face);
        let face = face
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let observer = observer::create_observer(&face, &params)?;
        Ok(Self {
            body,
            face,
            observer,
            params,
        })
    }

    pub fn params(&self) -> &FaceParams {
        &self.params
    }

    /// Create every row and bubble, observe each row, and return the row count.
    pub fn build_rows(&self, document: &web::Document) -> anyhow::Result<usize> {
        let rows = partition_rows(self.params.bubble_count);
        for row in &rows {
            let row_el = dom::create_div(document, &row_class(row.nominal))?;
            self.observer.observe(&row_el);
            for _ in 0..row.len {
                let bubble = dom::create_div(document, BUBBLE_CLASS)?;
                dom::set_style(&bubble, "background", &random_color().to_string());
                row_el
                    .append_child(&bubble)
                    .map_err(|e| anyhow::anyhow!("append bubble: {:?}", e))?;
            }
            self.face
                .append_child(&row_el)
                .map_err(|e| anyhow::anyhow!("append row: {:?}", e))?;
        }
        Ok(rows.len())
    }

    /// Fit the face to the current body size.
    pub fn resize(&self) -> FaceSize {
        let size = fit_face(
            self.body.offset_width() as f64,
            self.body.offset_height() as f64,
            self.params.gutter,
        );
        dom::set_style(&self.face, "width", &px(size.width));
        dom::set_style(&self.face, "height", &px(size.height));
        log::debug!("[face] resized to {:.1}x{:.1}", size.width, size.height);
        size
    }
}

fn read_params(face: &web::Element) -> FaceParams {
    let mut params = FaceParams::default();
    for key in OVERRIDE_KEYS {
        if let Some(value) = face.get_attribute(&override_attr(key)) {
            if let Err(e) = params.apply_override(key, &value) {
                log::warn!("ignoring face override: {}", e);
            }
        }
    }
    params
}
