use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub on_start_test: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let start_cb = {
        let cb = props.on_start_test.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header id="top" class="hero">
            <h1>{"Find Your Mouse DPI in Seconds"}</h1>
            <p class="hero-subtitle">{"Drag across the test area over a known distance and get an instant estimate of your sensor's DPI."}</p>
            <button id="start-test-btn" class="btn btn-primary" onclick={start_cb}>{"Start Free Test"}</button>
        </header>
    }
}
