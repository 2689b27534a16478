//! Site configuration.
//!
//! Every field has a default, so the page works without any configuration. An
//! `index.html` may override values with a JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">{ "measure": { "default_distance": 4 } }</script>
//! ```

use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::error::SiteError;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub measure: MeasureConfig,
    pub toast: ToastConfig,
    pub form: FormConfig,
    pub cta: CtaConfig,
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            measure: MeasureConfig::default(),
            toast: ToastConfig::default(),
            form: FormConfig::default(),
            cta: CtaConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Physical distance assumed when the input is empty or not a number.
    pub default_distance: f64,
    /// Delay before the post-gesture advisory is shown.
    pub advisory_delay_ms: u32,
    /// Readout text before the first measurement.
    pub readout_placeholder: String,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            default_distance: 5.0,
            advisory_delay_ms: 100,
            readout_placeholder: "0".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub show_after_ms: u32,
    pub success_visible_ms: u32,
    pub error_visible_ms: u32,
    pub remove_after_hide_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            show_after_ms: 100,
            success_visible_ms: 4000,
            error_visible_ms: 3000,
            remove_after_hide_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub submit_delay_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { submit_delay_ms: 1500 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    pub pulse_delay_ms: u32,
    pub pulse_hold_ms: u32,
    pub pulse_scale: f64,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            pulse_delay_ms: 500,
            pulse_hold_ms: 200,
            pulse_scale: 1.05,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the config block from the page, falling back to defaults.
    pub fn load() -> Self {
        match Self::read_element() {
            Ok(Some(raw)) => match Self::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("could not read #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    fn read_element() -> Result<Option<String>, SiteError> {
        let document = dom::document()?;
        Ok(document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
            .and_then(|script| script.text().ok()))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
