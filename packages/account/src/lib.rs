//! Account-service client and the login / sign-up form controller.
//!
//! This crate has no UI dependency: the `ui` package renders
//! [`SessionForm`] and forwards input events to [`AuthFormController`].
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod types;

pub use client::{AccountService, HttpAccountService};
pub use config::{AccountConfig, AppMode};
pub use controller::{AuthFormController, SessionForm, SubmitRequest};
pub use error::{AuthError, AuthRejectedError, TransportError, ValidationError};
pub use notify::{AuthMessages, ListenerId, Notification, NotificationKind};
pub use types::{AccountReply, AccountResponse, AuthMode, Credentials};
