use nav_core::{ClassList, NavError, Reload};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub(crate) fn js_err(e: JsValue) -> NavError {
    NavError::Dom(format!("{:?}", e))
}

/// Current scroll offset, measured the way the page theme does: how far the
/// body's top edge sits above the viewport.
pub fn scroll_offset(document: &web::Document) -> Result<f64, NavError> {
    let body = document.body().ok_or(NavError::MissingBody)?;
    Ok(-body.get_bounding_client_rect().top())
}

pub fn nav_element(document: &web::Document, nav_id: &str) -> Result<web::Element, NavError> {
    document
        .get_element_by_id(nav_id)
        .ok_or_else(|| NavError::MissingNavElement(nav_id.to_string()))
}

/// [`ClassList`] backed by an element's live `DOMTokenList`.
pub struct DomClassList {
    tokens: web::DomTokenList,
}

impl DomClassList {
    pub fn new(el: &web::Element) -> Self {
        Self {
            tokens: el.class_list(),
        }
    }
}

fn token_array(classes: &[&str]) -> js_sys::Array {
    classes.iter().map(|c| JsValue::from_str(c)).collect()
}

impl ClassList for DomClassList {
    fn contains(&self, class: &str) -> bool {
        self.tokens.contains(class)
    }

    fn add(&mut self, classes: &[&str]) {
        if let Err(e) = self.tokens.add(&token_array(classes)) {
            log::warn!("[dom] classList.add {:?} failed: {:?}", classes, e);
        }
    }

    fn remove(&mut self, classes: &[&str]) {
        if let Err(e) = self.tokens.remove(&token_array(classes)) {
            log::warn!("[dom] classList.remove {:?} failed: {:?}", classes, e);
        }
    }
}

/// [`Reload`] for the window's current location.
pub struct LocationReloader {
    location: web::Location,
}

impl LocationReloader {
    pub fn new(window: &web::Window) -> Self {
        Self {
            location: window.location(),
        }
    }
}

impl Reload for LocationReloader {
    fn reload(&self) -> Result<(), NavError> {
        self.location.reload().map_err(js_err)
    }
}
