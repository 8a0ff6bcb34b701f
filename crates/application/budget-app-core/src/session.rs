use std::sync::{Arc, Mutex, MutexGuard};

use budget_core::{AccountId, BackendError, BudgetDocument, BudgetPeriod};

use crate::ports::UserDataStore;

/// What the home screen needs to know about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub account_id: AccountId,
    pub display_name: String,
    pub period: Option<BudgetPeriod>,
}

/// Budget template written the first time a period is opened.
pub fn empty_budget() -> BudgetDocument {
    serde_json::json!({ "income": [], "expenses": [] })
}

pub struct BudgetSession<S: ?Sized> {
    store: Arc<S>,
}

impl<S> BudgetSession<S>
where
    S: UserDataStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Overview for the account the backend holds a session for.
    pub async fn load_overview(&self) -> Result<Overview, BackendError> {
        let account_id = self
            .store
            .current_account()
            .ok_or(BackendError::NotSignedIn)?;
        self.load_overview_for(&account_id).await
    }

    pub async fn load_overview_for(&self, account_id: &str) -> Result<Overview, BackendError> {
        let data = self.store.get_user_data(account_id).await?.unwrap_or_default();
        Ok(Overview {
            account_id: account_id.to_string(),
            period: data.selected_period(),
            display_name: data.display_name,
        })
    }

    /// Stores the period as the user's current one (year first, then month).
    pub async fn select_period(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
    ) -> Result<(), BackendError> {
        self.store.set_budget_year(account_id, period.year()).await?;
        self.store.set_budget_month(account_id, period.month()).await
    }

    /// Returns the budget for `period`, creating it from `template` if absent.
    pub async fn open_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
        template: &BudgetDocument,
    ) -> Result<BudgetDocument, BackendError> {
        if let Some(existing) = self.store.get_budget(account_id, period).await? {
            return Ok(existing);
        }
        tracing::debug!(account_id, period = %period.key(), "initializing budget");
        self.store.init_budget(account_id, period, template).await?;
        Ok(template.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub loading: bool,
    pub overview: Option<Overview>,
    pub year_input: String,
    pub month_input: String,
    pub budget: Option<BudgetDocument>,
    pub error: Option<String>,
    /// Id of the latest backend request; results from older ones are dropped.
    pub request_id: u64,
}

impl HomeState {
    fn start_request(&mut self) -> u64 {
        self.request_id += 1;
        self.request_id
    }
}

/// Drives the home screen from the UI thread; backend work runs on the tokio runtime.
pub struct HomeController<S: ?Sized> {
    state: Arc<Mutex<HomeState>>,
    session: Arc<BudgetSession<S>>,
}

impl<S: ?Sized> Clone for HomeController<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            session: Arc::clone(&self.session),
        }
    }
}

impl<S> HomeController<S>
where
    S: UserDataStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            state: Arc::new(Mutex::new(HomeState::default())),
            session: Arc::new(BudgetSession::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HomeState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn state(&self) -> HomeState {
        self.lock().clone()
    }

    pub fn with_state_mut<R>(&self, f: impl FnOnce(&mut HomeState) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn refresh(&self) {
        let request_id = self.with_state_mut(|s| {
            s.loading = true;
            s.error = None;
            s.start_request()
        });

        let this = self.clone();
        self.spawn_or_report(async move {
            let res = this.session.load_overview().await;
            this.finish_request(request_id, |s| match res {
                Ok(overview) => {
                    if let Some(p) = &overview.period {
                        s.year_input = p.year().to_string();
                        s.month_input = p.month().to_string();
                    }
                    s.overview = Some(overview);
                }
                Err(e) => s.error = Some(e.to_string()),
            });
        });
    }

    /// Selects the period typed into the inputs and opens (or creates) its budget.
    pub fn open_selected_period(&self) {
        let (request_id, account_id, period) = {
            let mut s = self.lock();
            let Some(account_id) = s.overview.as_ref().map(|o| o.account_id.clone()) else {
                s.error = Some(BackendError::NotSignedIn.to_string());
                return;
            };
            match BudgetPeriod::new(&s.year_input, &s.month_input) {
                Ok(p) => {
                    s.loading = true;
                    s.error = None;
                    (s.start_request(), account_id, p)
                }
                Err(e) => {
                    s.error = Some(e.to_string());
                    return;
                }
            }
        };

        let this = self.clone();
        self.spawn_or_report(async move {
            let res = async {
                this.session.select_period(&account_id, &period).await?;
                this.session
                    .open_budget(&account_id, &period, &empty_budget())
                    .await
            }
            .await;

            this.finish_request(request_id, |s| match res {
                Ok(budget) => {
                    if let Some(o) = s.overview.as_mut() {
                        o.period = Some(period);
                    }
                    s.budget = Some(budget);
                }
                Err(e) => s.error = Some(e.to_string()),
            });
        });
    }

    /// Applies a finished request's result unless a newer request superseded it.
    fn finish_request(&self, request_id: u64, apply: impl FnOnce(&mut HomeState)) {
        self.with_state_mut(|s| {
            if s.request_id != request_id {
                tracing::debug!(request_id, latest = s.request_id, "dropping stale home result");
                return;
            }
            s.loading = false;
            apply(s);
        });
    }

    fn spawn_or_report<F>(&self, fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        if let Err(e) = crate::async_runtime::spawn(fut) {
            tracing::error!("failed to start async runtime: {e}");
            self.with_state_mut(|s| {
                s.loading = false;
                s.error = Some(format!("Failed to start async runtime: {e}"));
            });
        }
    }
}
