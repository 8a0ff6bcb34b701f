//! Realtime database paths and the user record layout.

use serde::Deserialize;

use budget_core::{BackendError, BudgetPeriod};

pub(crate) const USERS: &str = "users";
pub(crate) const BUDGET: &str = "budget";
pub(crate) const BUDGET_YEAR: &str = "budgetYear";
pub(crate) const BUDGET_MONTH: &str = "budgetMonth";

/// Path segments of `users/{id}`.
pub(crate) fn user_path(account_id: &str) -> Vec<String> {
    vec![USERS.to_string(), account_id.to_string()]
}

/// Path segments of `users/{id}/{child}`.
pub(crate) fn user_child_path(account_id: &str, child: &str) -> Vec<String> {
    let mut path = user_path(account_id);
    path.push(child.to_string());
    path
}

/// Path segments of `users/{id}/budget/{year}{month}`.
pub(crate) fn budget_path(account_id: &str, period: &BudgetPeriod) -> Vec<String> {
    let mut path = user_child_path(account_id, BUDGET);
    path.push(period.key());
    path
}

/// The REST endpoint addresses a location by appending `.json` to its last segment.
pub(crate) fn rest_segments(path: &[String]) -> Vec<String> {
    let mut segs = path.to_vec();
    match segs.last_mut() {
        Some(last) => last.push_str(".json"),
        None => segs.push(".json".to_string()),
    }
    segs
}

#[derive(Debug, Deserialize)]
struct DbErrorBody {
    error: String,
}

/// Database errors arrive as `{"error": "Permission denied"}`.
pub(crate) fn rejection_from_body(status: reqwest::StatusCode, body: &[u8]) -> BackendError {
    match serde_json::from_slice::<DbErrorBody>(body) {
        Ok(b) if !b.error.is_empty() => BackendError::rejected_with_code(status.as_str(), b.error),
        _ => BackendError::rejected_with_code(
            status.as_str(),
            format!("Database request failed ({status})"),
        ),
    }
}
