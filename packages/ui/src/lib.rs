//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{auth_messages, AuthForm};

mod theme;
pub use theme::AppTheme;

mod toast;
pub use toast::{use_toasts, Toast, ToastKind, ToastProvider, Toasts};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};

mod lang_switch;
pub use lang_switch::LangSwitch;
