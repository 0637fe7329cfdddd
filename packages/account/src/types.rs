use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::AuthRejectedError;

/// Code the account service uses to signal success.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }

    pub fn endpoint_path(self) -> &'static str {
        match self {
            AuthMode::Login => "/account/login",
            AuthMode::SignUp => "/account/register",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::SignUp => "signup",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for both account endpoints.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &email_label(&self.email))
            .finish_non_exhaustive()
    }
}

/// Response body of the account service.
///
/// `code` arrives either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountResponse {
    #[serde(deserialize_with = "code_from_number_or_string")]
    pub code: i64,
    #[serde(default, alias = "msg")]
    pub message: Option<String>,
}

fn code_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCode {
        Number(i64),
        Text(String),
    }

    match RawCode::deserialize(deserializer)? {
        RawCode::Number(code) => Ok(code),
        RawCode::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric code {text:?}"))),
    }
}

/// Outcome of a submission the account service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountReply {
    Accepted,
    Rejected(AuthRejectedError),
}

impl From<AccountResponse> for AccountReply {
    fn from(res: AccountResponse) -> Self {
        if res.code == SUCCESS_CODE {
            return AccountReply::Accepted;
        }
        AccountReply::Rejected(AuthRejectedError {
            code: res.code,
            reason: res.message.filter(|m| !m.trim().is_empty()),
        })
    }
}

pub fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

/// Loggable stand-in for an email address.
pub fn email_label(email: &str) -> String {
    format!("{} (len={})", email_domain(email), email.len())
}
