use serde::{Deserialize, Serialize};

pub mod budget;
pub mod draft;
pub mod error;
pub mod routes;
pub mod validation;

pub use budget::{BudgetDocument, BudgetPeriod, PeriodError, UserData};
pub use draft::{Draft, ErrorInfo, FieldName, ParseFieldNameError};
pub use error::{BackendError, SignUpError};
pub use routes::Route;
pub use validation::{validate_draft, ValidationError, MIN_DISPLAY_NAME_CHARS};

pub type AccountId = String;

/// Identifier the backend issues for a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHandle {
    pub id: AccountId,
}

impl AccountHandle {
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self { id: id.into() }
    }
}

/// Profile record written once, right after the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip)]
    pub account_id: AccountId,
    pub display_name: String,
}

impl UserProfile {
    pub fn new(account: &AccountHandle, display_name: impl Into<String>) -> Self {
        Self {
            account_id: account.id.clone(),
            display_name: display_name.into(),
        }
    }
}
