use crate::validation::ValidationError;

/// Failure reported by the hosted backend or the transport in front of it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend refused the request; `message` is shown to the user as is.
    #[error("{message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected backend response: {0}")]
    Decode(String),
    #[error("no account is signed in")]
    NotSignedIn,
}

impl BackendError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            code: None,
            message: message.into(),
        }
    }

    pub fn rejected_with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            BackendError::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Anything that stops a sign-up submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}
