use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "#28a745",
            ToastKind::Error => "#007bff",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub leaving: bool,
}

/// Only one toast is ever on screen; showing a new one replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

pub enum ToastAction {
    Show { message: String, kind: ToastKind },
    /// Start the fade-out of toast `id`, ignored if it was already replaced.
    Leave(u64),
    Remove(u64),
}

impl ToastState {
    pub fn apply(&self, action: ToastAction) -> ToastState {
        let mut next = self.clone();
        match action {
            ToastAction::Show { message, kind } => {
                next.current = Some(Toast {
                    id: self.next_id,
                    message,
                    kind,
                    leaving: false,
                });
                next.next_id = self.next_id + 1;
            }
            ToastAction::Leave(id) => {
                if let Some(toast) = next.current.as_mut().filter(|t| t.id == id) {
                    toast.leaving = true;
                }
            }
            ToastAction::Remove(id) => {
                if next.current.as_ref().map(|t| t.id) == Some(id) {
                    next.current = None;
                }
            }
        }
        next
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Handle passed through context so any component can raise a toast.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    state: UseReducerHandle<ToastState>,
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        log::debug!("toast ({:?}): {}", kind, message);
        self.state.dispatch(ToastAction::Show { message, kind });
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("ToastProvider missing from component tree")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    {
        let state = state.clone();
        let current = state.current.clone();
        use_effect_with_deps(
            move |current: &Option<Toast>| {
                let mut timers = Vec::new();
                if let Some(toast) = current {
                    let id = toast.id;
                    if toast.leaving {
                        let state = state.clone();
                        timers.push(Timeout::new(config::TOAST_FADE_MS, move || {
                            state.dispatch(ToastAction::Remove(id));
                        }));
                    } else {
                        let state = state.clone();
                        timers.push(Timeout::new(config::TOAST_LIFETIME_MS, move || {
                            state.dispatch(ToastAction::Leave(id));
                        }));
                    }
                }
                // Dropping a gloo Timeout cancels it.
                move || drop(timers)
            },
            current,
        );
    }

    let toast_html = match &state.current {
        Some(toast) => {
            let motion = if toast.leaving {
                "animation: toastSlideOut 0.3s ease-in; transform: translateX(100%); opacity: 0;"
            } else {
                "animation: toastSlideIn 0.3s ease-out;"
            };
            let style = format!(
                "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
                 padding: 1rem 1.5rem; border-radius: 0.5rem; box-shadow: 0 4px 12px rgba(0,0,0,0.15); \
                 z-index: 10000; max-width: 300px; {}",
                toast.kind.background(),
                motion
            );
            html! {
                <div key={toast.id} class={toast.kind.class()} role="status" {style}>
                    {&toast.message}
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Toaster> context={Toaster { state: state.clone() }}>
            { for props.children.iter() }
            { toast_html }
            <style>
                {r#"
                    @keyframes toastSlideIn {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes toastSlideOut {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: &ToastState, message: &str, kind: ToastKind) -> ToastState {
        state.apply(ToastAction::Show { message: message.to_string(), kind })
    }

    #[test]
    fn test_new_toast_replaces_existing() {
        let state = show(&ToastState::default(), "first", ToastKind::Error);
        let state = show(&state, "second", ToastKind::Error);
        let toast = state.current.expect("toast visible");
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.id, 1);
    }

    #[test]
    fn test_leave_then_remove() {
        let state = show(&ToastState::default(), "saved", ToastKind::Success);
        let state = state.apply(ToastAction::Leave(0));
        assert!(state.current.as_ref().unwrap().leaving);
        let state = state.apply(ToastAction::Remove(0));
        assert!(state.current.is_none());
    }

    #[test]
    fn test_stale_timers_do_not_touch_replacement() {
        let state = show(&ToastState::default(), "old", ToastKind::Error);
        let state = show(&state, "new", ToastKind::Error);
        let state = state.apply(ToastAction::Leave(0)).apply(ToastAction::Remove(0));
        let toast = state.current.expect("replacement still visible");
        assert_eq!(toast.message, "new");
        assert!(!toast.leaving);
    }

    #[test]
    fn test_only_success_is_green() {
        assert_eq!(ToastKind::Success.background(), "#28a745");
        assert_eq!(ToastKind::Error.background(), "#007bff");
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
    }
}
