use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::ToastConfig;
use crate::state::{ToastAction, ToastKind, ToastQueue};

/// Lets any component raise a toast without prop drilling.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub push: Callback<(ToastKind, String)>,
}

/// Push a toast and schedule its show, hide and removal steps.
pub fn push_toast(
    queue: &UseReducerHandle<ToastQueue>,
    id: u64,
    kind: ToastKind,
    text: String,
    cfg: &ToastConfig,
) {
    queue.dispatch(ToastAction::Push { id, kind, text });
    {
        let queue = queue.clone();
        Timeout::new(cfg.show_after_ms, move || queue.dispatch(ToastAction::Show(id))).forget();
    }
    let queue = queue.clone();
    let remove_after = cfg.remove_after_hide_ms;
    Timeout::new(kind.visible_ms(cfg), move || {
        queue.dispatch(ToastAction::Hide(id));
        Timeout::new(remove_after, move || queue.dispatch(ToastAction::Remove(id))).forget();
    })
    .forget();
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastHostProps {
    pub queue: UseReducerHandle<ToastQueue>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <>
            { for props.queue.toasts.iter().map(|t| html! {
                <div key={t.id} class={classes!(t.kind.class(), t.shown.then_some("show"))}>
                    <div class="message-content">
                        <span class={t.kind.icon_class()}>{ t.kind.icon() }</span>
                        <span>{ t.text.clone() }</span>
                    </div>
                </div>
            }) }
        </>
    }
}
