use thiserror::Error;

/// Input refused locally, before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is required")]
    MissingEmail,
    #[error("password is required")]
    MissingPassword,
}

/// The account service answered with a code other than 200.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("account service rejected the request (code {code}){}", reason_suffix(.reason))]
pub struct AuthRejectedError {
    pub code: i64,
    pub reason: Option<String>,
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(": {r}"))
        .unwrap_or_default()
}

/// The request never produced a usable account-service answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return TransportError::Decode(e.to_string());
        }
        match e.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Request(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Rejected(#[from] AuthRejectedError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("a submission is already in progress")]
    Pending,
    #[error("no submission is in progress")]
    NotPending,
    #[error("already authenticated")]
    AlreadyAuthenticated,
}

impl AuthError {
    /// Refusals caused by the form's own state; these are not reported to the user.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            AuthError::Pending | AuthError::NotPending | AuthError::AlreadyAuthenticated
        )
    }
}
