//! The login / sign-up form controller.
//!
//! [`AuthFormController`] owns the [`SessionForm`] and is its only writer.
//! Submissions are split in two halves so a reactive UI can release its
//! borrow of the controller while the request is in flight:
//! [`AuthFormController::begin_submit`] validates and marks the form pending,
//! [`AuthFormController::complete_submit`] applies whatever the service
//! returned. [`AuthFormController::submit`] runs both around the call.

use tracing::{debug, info, warn};

use crate::client::AccountService;
use crate::error::{AuthError, TransportError, ValidationError};
use crate::notify::{AuthMessages, ListenerId, Listeners, Notification};
use crate::types::{email_label, AccountReply, AuthMode, Credentials};

/// In-memory form state. Read-only outside the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    email: String,
    password: String,
    password_visible: bool,
    mode: AuthMode,
    authenticated: bool,
    pending: bool,
}

impl SessionForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.pending && !self.authenticated
    }
}

/// Snapshot of what one submission sends. Produced by `begin_submit` and
/// consumed by `complete_submit`.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    mode: AuthMode,
    credentials: Credentials,
}

impl SubmitRequest {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

pub struct AuthFormController<S> {
    form: SessionForm,
    service: S,
    messages: AuthMessages,
    listeners: Listeners,
}

impl<S> std::fmt::Debug for AuthFormController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthFormController")
            .field("form", &self.form)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl<S: AccountService> AuthFormController<S> {
    pub fn new(service: S, messages: AuthMessages) -> Self {
        Self {
            form: SessionForm::default(),
            service,
            messages,
            listeners: Listeners::default(),
        }
    }

    pub fn form(&self) -> &SessionForm {
        &self.form
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn set_messages(&mut self, messages: AuthMessages) {
        self.messages = messages;
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Notification) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn set_email(&mut self, raw: &str) {
        self.form.email = raw.trim().to_string();
    }

    pub fn set_password(&mut self, raw: &str) {
        self.form.password = raw.trim().to_string();
    }

    pub fn toggle_visibility(&mut self) {
        self.form.password_visible = !self.form.password_visible;
    }

    /// Switch between login and sign-up. Field values are kept.
    pub fn toggle_mode(&mut self) -> AuthMode {
        if self.form.authenticated {
            debug!("auth_form.toggle_mode: ignored after authentication");
            return self.form.mode;
        }
        self.form.mode = self.form.mode.toggled();
        debug!("auth_form.toggle_mode: mode={}", self.form.mode);
        self.form.mode
    }

    /// Validate the form and mark it pending.
    ///
    /// Validation failures are reported to listeners; refusals (already
    /// pending or authenticated) are not.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, AuthError> {
        let checked = self.check_submittable();
        let request = match checked {
            Ok(request) => request,
            Err(err) if err.is_refusal() => {
                debug!("auth_form.begin_submit: refused: {err}");
                return Err(err);
            }
            Err(err) => {
                info!("auth_form.begin_submit: invalid: {err}");
                self.notify_failure(&err);
                return Err(err);
            }
        };

        self.form.pending = true;
        info!(
            "auth_form.submit: mode={} email={}",
            request.mode,
            email_label(&request.credentials.email)
        );
        Ok(request)
    }

    /// Apply the service result for a request started with `begin_submit`.
    ///
    /// Emits exactly one notification. Without a submission in flight the
    /// result is dropped with `AuthError::NotPending` and nothing is emitted.
    pub fn complete_submit(
        &mut self,
        request: SubmitRequest,
        result: Result<AccountReply, TransportError>,
    ) -> Result<(), AuthError> {
        if !self.form.pending {
            warn!(
                "auth_form.complete_submit: no submission in flight, dropping result for mode={}",
                request.mode
            );
            return Err(AuthError::NotPending);
        }
        self.form.pending = false;

        let err = match result {
            Ok(AccountReply::Accepted) => {
                self.form.authenticated = true;
                info!("auth_form.submit: accepted mode={}", request.mode);
                let notification = self.messages.success(request.mode);
                self.listeners.emit(&notification);
                return Ok(());
            }
            Ok(AccountReply::Rejected(rejected)) => {
                info!(
                    "auth_form.submit: rejected mode={} code={}",
                    request.mode, rejected.code
                );
                AuthError::Rejected(rejected)
            }
            Err(transport) => {
                warn!(
                    "auth_form.submit: transport failure mode={}: {transport}",
                    request.mode
                );
                AuthError::Transport(transport)
            }
        };

        self.notify_failure(&err);
        Err(err)
    }

    /// Send the current form to the account service and apply the answer.
    pub async fn submit(&mut self) -> Result<(), AuthError> {
        let request = self.begin_submit()?;
        let result = self
            .service
            .submit(request.mode, &request.credentials)
            .await;
        self.complete_submit(request, result)
    }

    fn check_submittable(&self) -> Result<SubmitRequest, AuthError> {
        if self.form.authenticated {
            return Err(AuthError::AlreadyAuthenticated);
        }
        if self.form.pending {
            return Err(AuthError::Pending);
        }
        if self.form.email.is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }
        if self.form.password.is_empty() {
            return Err(ValidationError::MissingPassword.into());
        }
        Ok(SubmitRequest {
            mode: self.form.mode,
            credentials: Credentials {
                email: self.form.email.clone(),
                password: self.form.password.clone(),
            },
        })
    }

    fn notify_failure(&mut self, err: &AuthError) {
        if let Some(notification) = self.messages.failure(err) {
            self.listeners.emit(&notification);
        }
    }
}
