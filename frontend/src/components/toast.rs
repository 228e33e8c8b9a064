use std::rc::Rc;

use gloo_timers::callback::Timeout;
use portfolio_shared::{contact::ToastKind, Settings};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
    shown: bool,
}

enum ToastAction {
    Push(Toast),
    Show(u32),
    Hide(u32),
    Remove(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ToastState {
    toasts: Vec<Toast>,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Show(id) => set_shown(&mut toasts, id, true),
            ToastAction::Hide(id) => set_shown(&mut toasts, id, false),
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self {
            toasts,
        })
    }
}

fn set_shown(toasts: &mut [Toast], id: u32, shown: bool) {
    if let Some(toast) = toasts.iter_mut().find(|toast| toast.id == id) {
        toast.shown = shown;
    }
}

/// Pops transient messages in the top-right corner.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    show: Callback<(String, ToastKind)>,
}

impl ToastHandle {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.show.emit((message.into(), kind));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(|| ToastHandle {
        show: Callback::from(|(message, _): (String, ToastKind)| {
            tracing::warn!("toast without a ToastProvider: {message}");
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let state = use_reducer(ToastState::default);
    let next_id = use_mut_ref(|| 0u32);

    let show = {
        let state = state.clone();
        let timings = (settings.toast_enter_delay_ms, settings.toast_visible_ms, settings.toast_exit_ms);
        use_callback(timings, move |(message, kind): (String, ToastKind), timings| {
            let (enter, visible, exit) = *timings;
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id = next_id.wrapping_add(1);
                *next_id
            };
            tracing::debug!("toast #{id} ({}): {message}", kind.name());
            state.dispatch(ToastAction::Push(Toast {
                id,
                kind,
                message,
                shown: false,
            }));

            // 滑入、停留、滑出、移除
            let dispatcher = state.dispatcher();
            Timeout::new(enter, move || dispatcher.dispatch(ToastAction::Show(id))).forget();
            let dispatcher = state.dispatcher();
            Timeout::new(visible, move || {
                dispatcher.dispatch(ToastAction::Hide(id));
                Timeout::new(exit, move || dispatcher.dispatch(ToastAction::Remove(id))).forget();
            })
            .forget();
        })
    };

    let handle = ToastHandle {
        show,
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            { for state.toasts.iter().enumerate().map(|(slot, toast)| {
                let style = format!(
                    "position: fixed; top: {}px; right: 20px; padding: 15px 20px; \
                     border-radius: 8px; color: white; font-weight: 500; z-index: 10000; \
                     transition: transform 0.3s ease; max-width: 300px; \
                     background-color: {}; transform: translateX({});",
                    100 + slot * 70,
                    toast.kind.color(),
                    if toast.shown { "0" } else { "100%" },
                );
                html! {
                    <div key={toast.id} class={toast.kind.class_name()} style={style} role="status">
                        { &toast.message }
                    </div>
                }
            }) }
        </ContextProvider<ToastHandle>>
    }
}
