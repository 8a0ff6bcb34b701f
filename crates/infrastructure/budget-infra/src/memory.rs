//! Process-local backend for offline use and tests.
//!
//! Enforces the same account policies the hosted identity service does so the
//! sign-up form behaves the same against either backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use budget_core::{
    AccountHandle, AccountId, BackendError, BudgetDocument, BudgetPeriod, UserData, UserProfile,
};

use crate::firebase::identity;

#[derive(Default)]
struct MemoryState {
    accounts_by_email: HashMap<String, AccountId>,
    users: HashMap<AccountId, UserData>,
    budgets: HashMap<(AccountId, String), BudgetDocument>,
    current: Option<AccountId>,
    profile_write_failure: Option<String>,
}

#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<MemoryState>,
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn rejected(code: &str) -> BackendError {
    let message = identity::message_for_code(code).unwrap_or(code);
    BackendError::rejected_with_code(code, message)
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Makes every following profile write fail with `message` (`None` restores writes).
    pub fn fail_profile_writes(&self, message: Option<&str>) {
        self.lock().profile_write_failure = message.map(str::to_string);
    }

    pub fn account_count(&self) -> usize {
        self.lock().accounts_by_email.len()
    }

    pub fn current_account(&self) -> Option<AccountId> {
        self.lock().current.clone()
    }

    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, BackendError> {
        // Sent as typed; surrounding whitespace fails the syntax check.
        if email.is_empty() {
            return Err(rejected(identity::MISSING_EMAIL));
        }
        if !looks_like_email(email) {
            return Err(rejected(identity::INVALID_EMAIL));
        }
        if password.is_empty() {
            return Err(rejected(identity::MISSING_PASSWORD));
        }
        if password.chars().count() < budget_config::MIN_PASSWORD_CHARS {
            return Err(rejected(identity::WEAK_PASSWORD));
        }

        let mut state = self.lock();
        let key = email.to_lowercase();
        if state.accounts_by_email.contains_key(&key) {
            return Err(rejected(identity::EMAIL_EXISTS));
        }

        let id = uuid::Uuid::new_v4().simple().to_string();
        state.accounts_by_email.insert(key, id.clone());
        state.current = Some(id.clone());
        tracing::debug!(account_id = %id, "in-memory account created");
        Ok(AccountHandle::new(id))
    }

    pub async fn persist_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        let mut state = self.lock();
        if let Some(message) = &state.profile_write_failure {
            return Err(BackendError::rejected(message.clone()));
        }
        // A set on `users/{id}` replaces the whole record, budgets included.
        state
            .budgets
            .retain(|(account_id, _), _| *account_id != profile.account_id);
        state.users.insert(
            profile.account_id.clone(),
            UserData {
                display_name: profile.display_name.clone(),
                ..Default::default()
            },
        );
        Ok(())
    }

    pub async fn get_user_data(&self, account_id: &str) -> Result<Option<UserData>, BackendError> {
        Ok(self.lock().users.get(account_id).cloned())
    }

    pub async fn set_budget_year(&self, account_id: &str, year: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        let user = state.users.entry(account_id.to_string()).or_default();
        user.budget_year = Some(year.to_string());
        Ok(())
    }

    pub async fn set_budget_month(
        &self,
        account_id: &str,
        month: &str,
    ) -> Result<(), BackendError> {
        let mut state = self.lock();
        let user = state.users.entry(account_id.to_string()).or_default();
        user.budget_month = Some(month.to_string());
        Ok(())
    }

    pub async fn get_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
    ) -> Result<Option<BudgetDocument>, BackendError> {
        let key = (account_id.to_string(), period.key());
        Ok(self.lock().budgets.get(&key).cloned())
    }

    pub async fn init_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
        budget: &BudgetDocument,
    ) -> Result<(), BackendError> {
        let key = (account_id.to_string(), period.key());
        self.lock().budgets.insert(key, budget.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("alice@example.com"));
        assert!(!looks_like_email("alice@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a b@example.com"));
        assert!(!looks_like_email("a@b@example.com"));
    }
}
