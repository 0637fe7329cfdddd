use account::{Notification, NotificationKind};
use dioxus::prelude::*;
use std::time::Duration;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION: Duration = Duration::from_millis(4500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
    Success,
    Warning,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
            ToastKind::Warning => "toast toast_warning",
        }
    }
}

impl From<NotificationKind> for ToastKind {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Error => ToastKind::Error,
            NotificationKind::Info => ToastKind::Info,
            NotificationKind::Success => ToastKind::Success,
            NotificationKind::Warning => ToastKind::Warning,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);
        let toast = Toast {
            id,
            title,
            body,
            kind,
        };
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(toast));

        let this = *self;
        spawn(async move {
            gloo_timers::future::sleep(TOAST_DURATION).await;
            this.dismiss(id);
        });
        id
    }

    /// Show a controller notification.
    pub fn notify(&self, notification: &Notification) {
        let body = Some(notification.body.clone()).filter(|b| !b.is_empty());
        self.push(
            notification.title.clone(),
            body,
            notification.kind.into(),
        );
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx.toasts }
    }
}

#[component]
fn ToastViewport(toasts: Signal<Vec<Toast>>) -> Element {
    let items = toasts();
    let lang = crate::use_lang()();
    rsx! {
        div { class: "toast_region toast_top_end", role: "status", "aria-live": "polite",
            for toast in items.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            let mut toasts = toasts;
                            move |_| {
                                toasts.with_mut(|items| items.retain(|t| t.id != id));
                            }
                        },
                        {crate::t(lang, "toast.dismiss")}
                    }
                }
            }
        }
    }
}
