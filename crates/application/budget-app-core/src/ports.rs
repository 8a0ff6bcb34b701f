use async_trait::async_trait;
use budget_core::{
    AccountHandle, AccountId, BackendError, BudgetDocument, BudgetPeriod, Route, UserData,
    UserProfile,
};

/// Account creation and profile persistence on the hosted backend.
#[async_trait]
pub trait AccountBackend: Send + Sync + 'static {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, BackendError>;

    async fn persist_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError>;
}

/// Per-user records in the realtime database.
#[async_trait]
pub trait UserDataStore: Send + Sync + 'static {
    /// Account the backend currently holds a session for, if any.
    fn current_account(&self) -> Option<AccountId>;

    async fn get_user_data(&self, account_id: &str) -> Result<Option<UserData>, BackendError>;

    async fn set_budget_year(&self, account_id: &str, year: &str) -> Result<(), BackendError>;

    async fn set_budget_month(&self, account_id: &str, month: &str) -> Result<(), BackendError>;

    async fn get_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
    ) -> Result<Option<BudgetDocument>, BackendError>;

    async fn init_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
        budget: &BudgetDocument,
    ) -> Result<(), BackendError>;
}

/// Router collaborator. Fire and forget.
pub trait Navigator: Send + Sync + 'static {
    fn navigate_to(&self, route: Route);
}

/// Forwards navigation requests to whoever drains the receiving end.
pub struct ChannelNavigator {
    tx: std::sync::mpsc::Sender<Route>,
}

impl ChannelNavigator {
    pub fn channel() -> (Self, std::sync::mpsc::Receiver<Route>) {
        let (tx, rx) = std::sync::mpsc::channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to(&self, route: Route) {
        if self.tx.send(route).is_err() {
            tracing::debug!("navigation to {route} dropped: router is gone");
        }
    }
}
