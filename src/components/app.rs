use yew::prelude::*;

use super::{
    contact_form::ContactForm,
    dpi_tester::DpiTester,
    faq::Faq,
    footer::Footer,
    hero::Hero,
    nav_bar::NavBar,
    showcase::{BlogSection, FeatureGrid, Testimonials},
    styles::PAGE_STYLES,
    toast_host::{push_toast, ToastContext, ToastHost},
};
use crate::config::SiteConfig;
use crate::state::{ToastKind, ToastQueue};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let pulses = use_state(|| 0_u32);
    let toasts = use_reducer(ToastQueue::default);
    let next_toast_id = use_mut_ref(|| 0_u64);

    use_effect_with((), |_| {
        log::info!("MouseDPI Pro initialized successfully!");
        || ()
    });

    // Built once so toast updates don't hand consumers a new context.
    let push = {
        let toasts = toasts.clone();
        let cfg = config.toast.clone();
        let next_toast_id = next_toast_id.clone();
        use_callback((), move |(kind, text): (ToastKind, String), _| {
            let id = {
                let mut next = next_toast_id.borrow_mut();
                *next += 1;
                *next
            };
            push_toast(&toasts, id, kind, text, &cfg);
        })
    };
    let toast_ctx = ToastContext { push };

    let start_test = {
        let pulses = pulses.clone();
        use_callback(*pulses, move |_: (), current| pulses.set(current + 1))
    };

    html! {
        <ContextProvider<SiteConfig> context={config.clone()}>
            <ContextProvider<ToastContext> context={toast_ctx}>
                <style>{ PAGE_STYLES }</style>
                <NavBar />
                <Hero on_start_test={start_test.clone()} />
                <main>
                    <DpiTester pulse={*pulses} />
                    <FeatureGrid />
                    <BlogSection />
                    <Testimonials />
                    <Faq />
                    <ContactForm />
                </main>
                <Footer on_start_test={start_test} />
                <ToastHost queue={toasts.clone()} />
            </ContextProvider<ToastContext>>
        </ContextProvider<SiteConfig>>
    }
}
