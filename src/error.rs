use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring a feature to the page. None of these are fatal:
/// callers log them and leave the feature switched off.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element `{0}` is missing or has the wrong type")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
