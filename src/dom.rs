// Thin accessors over the browser globals. Each returns a `SiteError`
// instead of panicking so callers can switch a feature off.
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::SiteError;

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body() -> Result<HtmlElement, SiteError> {
    document()?.body().ok_or(SiteError::NoBody)
}

pub fn element_by_id(id: &'static str) -> Result<HtmlElement, SiteError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(SiteError::MissingElement(id))
}

/// Smoothly scrolls `el` into view, aligned by `block`.
pub fn smooth_scroll(el: &web_sys::Element, block: ScrollLogicalPosition) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Scrolls to the element matched by `selector` (an in-page `#anchor`).
/// Returns `Ok(false)` when nothing matches.
pub fn scroll_to_selector(selector: &str) -> Result<bool, SiteError> {
    match document()?.query_selector(selector)? {
        Some(target) => {
            smooth_scroll(&target, ScrollLogicalPosition::Start);
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn alert(message: &str) -> Result<(), SiteError> {
    window()?.alert_with_message(message)?;
    Ok(())
}
