// Transient success/error messages shown in the corner of the page.
use std::rc::Rc;
use yew::Reducible;

use crate::config::ToastConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success-message",
            ToastKind::Error => "error-message",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "⚠",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success-icon",
            ToastKind::Error => "error-icon",
        }
    }

    pub fn visible_ms(self, cfg: &ToastConfig) -> u32 {
        match self {
            ToastKind::Success => cfg.success_visible_ms,
            ToastKind::Error => cfg.error_visible_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    /// Carries the `show` class (drives the CSS fade).
    pub shown: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

/// Ids are assigned by the caller so it can schedule `Show`/`Hide`/`Remove`
/// for the toast it just pushed.
#[derive(Clone, Debug)]
pub enum ToastAction {
    Push { id: u64, kind: ToastKind, text: String },
    Show(u64),
    Hide(u64),
    Remove(u64),
}

impl ToastQueue {
    fn set_shown(&mut self, id: u64, shown: bool) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(t) => {
                t.shown = shown;
                true
            }
            None => false,
        }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ToastAction::*;
        let mut new = (*self).clone();
        match action {
            Push { id, kind, text } => {
                new.toasts.push(Toast {
                    id,
                    kind,
                    text,
                    shown: false,
                });
            }
            Show(id) => {
                if !new.set_shown(id, true) {
                    return self;
                }
            }
            Hide(id) => {
                if !new.set_shown(id, false) {
                    return self;
                }
            }
            Remove(id) => {
                let before = new.toasts.len();
                new.toasts.retain(|t| t.id != id);
                if new.toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let id = 7;
        let q = Rc::new(ToastQueue::default());
        let q = q.reduce(ToastAction::Push {
            id,
            kind: ToastKind::Error,
            text: "oops".into(),
        });
        assert_eq!(q.toasts.len(), 1);
        assert!(!q.toasts[0].shown);
        let q = q.reduce(ToastAction::Show(id));
        assert!(q.toasts[0].shown);
        let q = q.reduce(ToastAction::Hide(id));
        assert!(!q.toasts[0].shown);
        let q = q.reduce(ToastAction::Remove(id));
        assert!(q.toasts.is_empty());
    }

    #[test]
    fn unknown_id_keeps_state() {
        let q = Rc::new(ToastQueue::default());
        let same = q.clone().reduce(ToastAction::Show(42));
        assert!(Rc::ptr_eq(&q, &same));
    }

    #[test]
    fn durations_follow_kind() {
        let cfg = ToastConfig::default();
        assert_eq!(ToastKind::Success.visible_ms(&cfg), 4000);
        assert_eq!(ToastKind::Error.visible_ms(&cfg), 3000);
    }
}
