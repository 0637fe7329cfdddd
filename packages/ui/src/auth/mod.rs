use account::{
    AccountConfig, AccountService, AuthFormController, AuthMessages, AuthMode, HttpAccountService,
};
use dioxus::prelude::*;

use crate::{t, Lang};

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");
const LOGO: Asset = asset!("/assets/logo.svg");

type Controller = AuthFormController<HttpAccountService>;

/// Login / sign-up form.
///
/// Renders the controller's session form, forwards input events to it and
/// shows its notifications as toasts. Once authenticated the form is replaced
/// by the signed-in view.
#[component]
pub fn AuthForm(config: AccountConfig) -> Element {
    let lang_sig = crate::use_lang();
    let lang = lang_sig();
    let toasts = crate::use_toasts();

    let mut controller = use_signal(move || {
        let service = HttpAccountService::new(config);
        let mut controller = Controller::new(service, auth_messages(lang));
        controller.subscribe(move |n| toasts.notify(n));
        controller
    });

    // Keep notification texts in the current language.
    use_effect(move || {
        let messages = auth_messages(lang_sig());
        controller.write().set_messages(messages);
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let started = controller.write().begin_submit();
        let request = match started {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("auth_form: submit refused: {err}");
                return;
            }
        };
        let service = controller.read().service().clone();
        spawn(async move {
            let result = service
                .submit(request.mode(), request.credentials())
                .await;
            if let Err(err) = controller.write().complete_submit(request, result) {
                tracing::debug!("auth_form: submit failed: {err}");
            }
        });
    };

    let state = controller.read().form().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div { class: "auth_container",
            main { class: "auth_main",
                img { class: "auth_logo", src: LOGO, alt: "logo", width: "250", height: "60" }

                if state.authenticated() {
                    p { class: "auth_title", {t(lang, "auth.signed_in")} }
                } else {
                    form { class: "auth_card", onsubmit: on_submit,
                        div { class: "auth_input",
                            span { class: "auth_addon", "✉" }
                            input {
                                name: "email",
                                r#type: "text",
                                autocomplete: "username",
                                placeholder: t(lang, "auth.email_ph"),
                                value: state.email().to_string(),
                                oninput: move |e| controller.write().set_email(&e.value()),
                            }
                        }

                        div { class: "auth_input",
                            span { class: "auth_addon", "🔒" }
                            input {
                                name: "password",
                                r#type: state.password_input_type(),
                                autocomplete: password_autocomplete(state.mode()),
                                placeholder: t(lang, "auth.password_ph"),
                                value: state.password().to_string(),
                                oninput: move |e| controller.write().set_password(&e.value()),
                            }
                            button {
                                class: "auth_eye",
                                r#type: "button",
                                "aria-label": visibility_label(lang, state.password_visible()),
                                onclick: move |_| controller.write().toggle_visibility(),
                                if state.password_visible() { "🙈" } else { "👁" }
                            }
                        }

                        button {
                            class: "btn primary auth_submit",
                            r#type: "submit",
                            disabled: !state.can_submit(),
                            if state.pending() {
                                {t(lang, "auth.submitting")}
                            } else {
                                {submit_label(lang, state.mode())}
                            }
                            span { class: "auth_submit_arrow", "➜" }
                        }

                        div {
                            class: "auth_tips",
                            onclick: move |_| {
                                controller.write().toggle_mode();
                            },
                            {switch_label(lang, state.mode())}
                        }
                    }
                }
            }
        }
    }
}

/// Notification texts for `lang`.
pub fn auth_messages(lang: Lang) -> AuthMessages {
    AuthMessages {
        title: t(lang, "toast.title"),
        login_succeeded: t(lang, "toast.login_succeeded"),
        registration_succeeded: t(lang, "toast.registration_succeeded"),
        error_title: t(lang, "toast.error_title"),
        rejected_fallback: t(lang, "toast.rejected"),
        transport_failed: t(lang, "toast.transport_failed"),
        missing_email: t(lang, "toast.missing_email"),
        missing_password: t(lang, "toast.missing_password"),
    }
}

pub(crate) fn submit_label(lang: Lang, mode: AuthMode) -> String {
    match mode {
        AuthMode::Login => t(lang, "auth.submit.login"),
        AuthMode::SignUp => t(lang, "auth.submit.signup"),
    }
}

pub(crate) fn switch_label(lang: Lang, mode: AuthMode) -> String {
    match mode {
        AuthMode::Login => t(lang, "auth.switch.to_signup"),
        AuthMode::SignUp => t(lang, "auth.switch.to_login"),
    }
}

pub(crate) fn visibility_label(lang: Lang, visible: bool) -> String {
    if visible {
        t(lang, "auth.hide_password")
    } else {
        t(lang, "auth.show_password")
    }
}

pub(crate) fn password_autocomplete(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "current-password",
        AuthMode::SignUp => "new-password",
    }
}
