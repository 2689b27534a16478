use yew::prelude::*;

use super::nav_bar::AnchorLink;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub on_start_test: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let start_cb = {
        let cb = props.on_start_test.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <footer class="footer">
            <div class="footer-cta">
                <h2>{"Ready to measure?"}</h2>
                <button id="footer-test-btn" class="btn btn-primary" onclick={start_cb}>{"Test My Mouse"}</button>
            </div>
            <div class="footer-links">
                <AnchorLink href="#faq" label="FAQ" />
                <AnchorLink href="#contact" label="Contact" />
                <AnchorLink href="#top" label="Back to top" />
            </div>
            <p class="footer-note">{"© MouseDPI Pro. Measurements run entirely in your browser."}</p>
        </footer>
    }
}
