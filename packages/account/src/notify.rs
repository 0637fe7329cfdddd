//! Notification events emitted by the form controller.
//!
//! The controller never talks to a toast primitive directly. Presentation
//! code subscribes a listener and decides how each [`Notification`] is shown.

use crate::error::{AuthError, AuthRejectedError, TransportError, ValidationError};
use crate::types::AuthMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// User-facing texts for every notification the controller can emit.
///
/// Deployments swap these per locale; `Default` is English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthMessages {
    pub title: String,
    pub login_succeeded: String,
    pub registration_succeeded: String,
    pub error_title: String,
    pub rejected_fallback: String,
    pub transport_failed: String,
    pub missing_email: String,
    pub missing_password: String,
}

impl Default for AuthMessages {
    fn default() -> Self {
        Self {
            title: "Notice".to_string(),
            login_succeeded: "Login succeeded".to_string(),
            registration_succeeded: "Registration succeeded".to_string(),
            error_title: "Error".to_string(),
            rejected_fallback: "The account service refused the request".to_string(),
            transport_failed: "Could not reach the account service".to_string(),
            missing_email: "Please enter your email".to_string(),
            missing_password: "Please enter your password".to_string(),
        }
    }
}

impl AuthMessages {
    pub fn success(&self, mode: AuthMode) -> Notification {
        let body = match mode {
            AuthMode::Login => &self.login_succeeded,
            AuthMode::SignUp => &self.registration_succeeded,
        };
        Notification {
            kind: NotificationKind::Success,
            title: self.title.clone(),
            body: body.clone(),
        }
    }

    /// Notification for a failed submission. Refusals map to `None`.
    pub fn failure(&self, err: &AuthError) -> Option<Notification> {
        let body = match err {
            AuthError::Validation(ValidationError::MissingEmail) => self.missing_email.clone(),
            AuthError::Validation(ValidationError::MissingPassword) => {
                self.missing_password.clone()
            }
            AuthError::Rejected(AuthRejectedError { code, reason }) => match reason {
                Some(reason) => reason.clone(),
                None => format!("{} ({code})", self.rejected_fallback),
            },
            AuthError::Transport(e) => format!("{} ({})", self.transport_failed, transport_detail(e)),
            AuthError::Pending | AuthError::NotPending | AuthError::AlreadyAuthenticated => {
                return None
            }
        };
        let kind = match err {
            AuthError::Validation(_) => NotificationKind::Warning,
            _ => NotificationKind::Error,
        };
        Some(Notification {
            kind,
            title: self.error_title.clone(),
            body,
        })
    }
}

fn transport_detail(e: &TransportError) -> String {
    match e {
        TransportError::Status(status) => format!("HTTP {status}"),
        other => other.to_string(),
    }
}

/// Handle returned by [`Listeners::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Notification)>;

/// Subscribed notification listeners, called in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn add(&mut self, listener: impl FnMut(&Notification) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, notification: &Notification) {
        if self.is_empty() {
            tracing::debug!("notify: no listener for {:?}", notification.kind);
            return;
        }
        for (_, listener) in &mut self.entries {
            listener(notification);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn success_message_depends_on_mode() {
        let messages = AuthMessages::default();
        let login = messages.success(AuthMode::Login);
        assert_eq!(login.kind, NotificationKind::Success);
        assert_eq!(login.title, "Notice");
        assert_eq!(login.body, "Login succeeded");
        assert_eq!(
            messages.success(AuthMode::SignUp).body,
            "Registration succeeded"
        );
    }

    #[test]
    fn rejected_uses_server_reason_or_fallback() {
        let messages = AuthMessages::default();
        let with_reason = messages
            .failure(&AuthError::Rejected(AuthRejectedError {
                code: 401,
                reason: Some("wrong password".into()),
            }))
            .unwrap();
        assert_eq!(with_reason.kind, NotificationKind::Error);
        assert_eq!(with_reason.body, "wrong password");

        let fallback = messages
            .failure(&AuthError::Rejected(AuthRejectedError {
                code: 500,
                reason: None,
            }))
            .unwrap();
        assert_eq!(fallback.body, "The account service refused the request (500)");
    }

    #[test]
    fn transport_and_rejection_texts_differ() {
        let messages = AuthMessages::default();
        let transport = messages
            .failure(&AuthError::Transport(TransportError::Status(503)))
            .unwrap();
        assert_eq!(transport.body, "Could not reach the account service (HTTP 503)");
        assert_eq!(transport.title, "Error");
    }

    #[test]
    fn validation_is_a_warning() {
        let n = AuthMessages::default()
            .failure(&AuthError::Validation(ValidationError::MissingPassword))
            .unwrap();
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.body, "Please enter your password");
    }

    #[test]
    fn refusals_produce_no_notification() {
        let messages = AuthMessages::default();
        assert!(messages.failure(&AuthError::Pending).is_none());
        assert!(messages.failure(&AuthError::NotPending).is_none());
        assert!(messages.failure(&AuthError::AlreadyAuthenticated).is_none());
    }

    #[test]
    fn listeners_receive_in_order_and_can_be_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let a = {
            let seen = seen.clone();
            listeners.add(move |n| seen.borrow_mut().push(format!("a:{}", n.body)))
        };
        {
            let seen = seen.clone();
            listeners.add(move |n| seen.borrow_mut().push(format!("b:{}", n.body)));
        }

        let n = AuthMessages::default().success(AuthMode::Login);
        listeners.emit(&n);
        assert!(listeners.remove(a));
        assert!(!listeners.remove(a));
        listeners.emit(&n);

        assert_eq!(
            *seen.borrow(),
            vec![
                "a:Login succeeded",
                "b:Login succeeded",
                "b:Login succeeded"
            ]
        );
        assert_eq!(listeners.len(), 1);
        assert!(!listeners.is_empty());
    }

    #[test]
    fn emit_without_listeners_is_a_no_op() {
        let mut listeners = Listeners::default();
        assert!(listeners.is_empty());
        listeners.emit(&AuthMessages::default().success(AuthMode::Login));
        assert_eq!(format!("{listeners:?}"), "Listeners { len: 0, .. }");
    }
}
