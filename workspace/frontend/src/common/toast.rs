use std::rc::Rc;

use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "fas fa-check-circle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

enum ToastAction {
    Add(String, ToastType),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    next_id: usize,
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(message, toast_type) => {
                toasts.push(Toast {
                    id: next_id,
                    message,
                    toast_type,
                });
                next_id += 1;
            }
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { next_id, toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    list: UseReducerDispatcher<ToastList>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.show(message, ToastType::Success);
    }

    pub fn show_error(&self, message: String) {
        self.show(message, ToastType::Error);
    }

    fn show(&self, message: String, toast_type: ToastType) {
        self.list.dispatch(ToastAction::Add(message, toast_type));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);

    // Schedule auto-dismiss for the newest toast
    {
        let dispatcher = list.dispatcher();
        let newest = list.toasts.last().map(|t| t.id);
        use_effect_with(newest, move |newest| {
            if let Some(id) = *newest {
                let duration = settings::get_settings().toast_duration_ms;
                gloo_timers::callback::Timeout::new(duration, move || {
                    dispatcher.dispatch(ToastAction::Remove(id));
                })
                .forget();
            }
            || ()
        });
    }

    let context = ToastContext {
        list: list.dispatcher(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = list.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
