//! Account creation against the hosted identity REST API.

use serde::{Deserialize, Serialize};

use budget_core::BackendError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignUpResponse {
    pub local_id: String,
    pub id_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

pub const EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
pub const WEAK_PASSWORD: &str = "WEAK_PASSWORD";
pub const MISSING_EMAIL: &str = "MISSING_EMAIL";
pub const MISSING_PASSWORD: &str = "MISSING_PASSWORD";

/// User-facing text for identity error codes, worded as the hosted web SDK words them.
pub fn message_for_code(code: &str) -> Option<&'static str> {
    Some(match code {
        EMAIL_EXISTS => "The email address is already in use by another account.",
        INVALID_EMAIL => "The email address is badly formatted.",
        WEAK_PASSWORD => "Password should be at least 6 characters",
        MISSING_EMAIL => "An email address must be provided.",
        MISSING_PASSWORD => "A password must be provided.",
        "OPERATION_NOT_ALLOWED" => "Password sign-in is disabled for this project.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "We have blocked all requests from this device due to unusual activity. Try again later."
        }
        "INVALID_API_KEY" => "Your API key is invalid, please check you have copied it correctly.",
        _ => return None,
    })
}

/// Maps an identity error body to a rejection.
///
/// Bodies look like `{"error":{"message":"WEAK_PASSWORD : Password should be ..."}}`.
/// Known codes get their friendly text; anything else is passed through.
pub(crate) fn rejection_from_body(status: reqwest::StatusCode, body: &[u8]) -> BackendError {
    let raw = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(env) if !env.error.message.is_empty() => env.error.message,
        _ => {
            return BackendError::rejected_with_code(
                status.as_str(),
                format!("Account creation failed ({status})"),
            )
        }
    };

    let (code, detail) = match raw.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (raw.trim(), None),
    };

    // API key failures come back as free text rather than a code.
    let code = if code.starts_with("API key not valid") {
        "INVALID_API_KEY"
    } else {
        code
    };

    let message = match (message_for_code(code), detail) {
        (Some(known), _) => known.to_string(),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => code.to_string(),
    };
    BackendError::rejected_with_code(code, message)
}
