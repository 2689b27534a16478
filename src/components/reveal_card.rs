use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{RevealConfig, SiteConfig};
use crate::error::SiteError;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealCardProps {
    /// Card family, e.g. `feature-card`.
    pub class: AttrValue,
    /// Transition delay in seconds (index × family step).
    pub delay_secs: f64,
    #[prop_or_default]
    pub children: Html,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe(
    target: &Element,
    cfg: &RevealConfig,
    revealed: UseStateHandle<bool>,
) -> Result<(IntersectionObserver, ObserverCallback), SiteError> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    revealed.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(&cfg.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    Ok((observer, callback))
}

/// Card that fades and slides in the first time it scrolls into view.
#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let cfg = config.reveal.clone();
        use_effect_with((), move |_| {
            let installed = match node.cast::<Element>() {
                Some(el) => observe(&el, &cfg, revealed.clone()),
                None => Err(SiteError::MissingElement("reveal card")),
            };
            let installed = match installed {
                Ok(pair) => Some(pair),
                Err(e) => {
                    // Without an observer the card would stay invisible.
                    log::warn!("scroll reveal unavailable: {e}");
                    revealed.set(true);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = installed {
                    observer.disconnect();
                }
            }
        });
    }

    let (opacity, offset) = if *revealed { ("1", "0") } else { ("0", "30px") };
    let style = format!(
        "opacity:{opacity}; transform:translateY({offset}); transition: opacity 0.6s ease {d:.2}s, transform 0.6s ease {d:.2}s;",
        d = props.delay_secs
    );
    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { props.children.clone() }
        </div>
    }
}
