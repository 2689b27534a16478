use yew::prelude::*;

use crate::dom;

const LINKS: &[(&str, &str)] = &[
    ("#dpi-test", "DPI Test"),
    ("#features", "Features"),
    ("#blog", "Blog"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// In-page link that smooth-scrolls to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match dom::scroll_to_selector(&href) {
                Ok(true) => {}
                Ok(false) => log::debug!("anchor target {href} not on page"),
                Err(e) => log::warn!("cannot scroll to {href}: {e}"),
            }
        })
    };
    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>{ props.label.clone() }</a>
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    html! {
        <nav class="navbar">
            <div class="nav-container">
                <AnchorLink href="#top" label="MouseDPI Pro" class={classes!("nav-logo")} />
                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item"><AnchorLink href={*href} label={*label} class={classes!("nav-link")} /></li>
                    }) }
                </ul>
                <button id="mobile-menu" class="nav-toggle" aria-label="Toggle navigation" onclick={toggle}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
