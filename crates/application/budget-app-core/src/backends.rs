use std::sync::Arc;

use async_trait::async_trait;
use budget_core::{
    AccountHandle, AccountId, BackendError, BudgetDocument, BudgetPeriod, UserData, UserProfile,
};
use budget_infra::{FirebaseBackend, FirebaseConfig, InMemoryBackend, Session};

use crate::ports::{AccountBackend, UserDataStore};
use crate::settings::BackendSettings;

/// A backend that serves both the sign-up form and the home screen.
pub trait HostedBackend: AccountBackend + UserDataStore {}

impl<T: AccountBackend + UserDataStore> HostedBackend for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Firebase,
    Memory,
}

/// Builds the hosted backend from settings.
pub fn firebase_backend(settings: &BackendSettings) -> anyhow::Result<FirebaseBackend> {
    if !settings.is_configured() {
        anyhow::bail!(
            "backend is not configured: set {} and {}",
            budget_config::ENV_API_KEY,
            budget_config::ENV_DATABASE_URL
        );
    }
    let client = budget_infra::default_http_client(settings.request_timeout())?;
    let config = FirebaseConfig {
        api_key: settings.api_key.clone(),
        database_url: settings.database_url.clone(),
        auth_url: settings.auth_url.clone(),
    };
    Ok(FirebaseBackend::new(client, &config)?)
}

/// Picks the requested backend; an existing id token becomes the starting session.
pub fn connect(
    kind: BackendKind,
    settings: &BackendSettings,
    session: Option<Session>,
) -> anyhow::Result<Arc<dyn HostedBackend>> {
    match kind {
        BackendKind::Firebase => {
            let mut backend = firebase_backend(settings)?;
            if let Some(session) = session {
                backend = backend.with_session(session);
            }
            Ok(Arc::new(backend))
        }
        BackendKind::Memory => Ok(Arc::new(InMemoryBackend::new())),
    }
}

/// Hosted backend when configured, otherwise the in-memory one.
pub fn connect_or_offline(settings: &BackendSettings) -> (BackendKind, Arc<dyn HostedBackend>) {
    if settings.is_configured() {
        match firebase_backend(settings) {
            Ok(backend) => return (BackendKind::Firebase, Arc::new(backend)),
            Err(e) => tracing::warn!("hosted backend unavailable, running offline: {e:#}"),
        }
    } else {
        tracing::warn!("backend not configured, running offline with an in-memory backend");
    }
    (BackendKind::Memory, Arc::new(InMemoryBackend::new()))
}

#[async_trait]
impl AccountBackend for FirebaseBackend {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, BackendError> {
        FirebaseBackend::create_account(self, email, password).await
    }

    async fn persist_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        FirebaseBackend::persist_user_profile(self, profile).await
    }
}

#[async_trait]
impl UserDataStore for FirebaseBackend {
    fn current_account(&self) -> Option<AccountId> {
        FirebaseBackend::current_account(self)
    }

    async fn get_user_data(&self, account_id: &str) -> Result<Option<UserData>, BackendError> {
        FirebaseBackend::get_user_data(self, account_id).await
    }

    async fn set_budget_year(&self, account_id: &str, year: &str) -> Result<(), BackendError> {
        FirebaseBackend::set_budget_year(self, account_id, year).await
    }

    async fn set_budget_month(&self, account_id: &str, month: &str) -> Result<(), BackendError> {
        FirebaseBackend::set_budget_month(self, account_id, month).await
    }

    async fn get_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
    ) -> Result<Option<BudgetDocument>, BackendError> {
        FirebaseBackend::get_budget(self, account_id, period).await
    }

    async fn init_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
        budget: &BudgetDocument,
    ) -> Result<(), BackendError> {
        FirebaseBackend::init_budget(self, account_id, period, budget).await
    }
}

#[async_trait]
impl AccountBackend for InMemoryBackend {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, BackendError> {
        InMemoryBackend::create_account(self, email, password).await
    }

    async fn persist_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        InMemoryBackend::persist_user_profile(self, profile).await
    }
}

#[async_trait]
impl UserDataStore for InMemoryBackend {
    fn current_account(&self) -> Option<AccountId> {
        InMemoryBackend::current_account(self)
    }

    async fn get_user_data(&self, account_id: &str) -> Result<Option<UserData>, BackendError> {
        InMemoryBackend::get_user_data(self, account_id).await
    }

    async fn set_budget_year(&self, account_id: &str, year: &str) -> Result<(), BackendError> {
        InMemoryBackend::set_budget_year(self, account_id, year).await
    }

    async fn set_budget_month(&self, account_id: &str, month: &str) -> Result<(), BackendError> {
        InMemoryBackend::set_budget_month(self, account_id, month).await
    }

    async fn get_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
    ) -> Result<Option<BudgetDocument>, BackendError> {
        InMemoryBackend::get_budget(self, account_id, period).await
    }

    async fn init_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
        budget: &BudgetDocument,
    ) -> Result<(), BackendError> {
        InMemoryBackend::init_budget(self, account_id, period, budget).await
    }
}
