use std::sync::Arc;

use anyhow::{Context, Result};
use budget_app_core::session::empty_budget;
use budget_app_core::{
    BudgetSession, DraftStore, FormCommand, HostedBackend, Navigator, SignUpController,
    SubmitOutcome,
};
use budget_core::{AccountHandle, BudgetPeriod, FieldName, Route};

/// Prints where the form would send the user next.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate_to(&self, route: Route) {
        println!(":: Next: {route}");
    }
}

pub struct SignUpInput {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpInput {
    /// Without a confirmation the password is its own confirmation.
    pub fn new(
        display_name: String,
        email: String,
        password: String,
        confirm_password: Option<String>,
    ) -> Self {
        let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
        Self {
            display_name,
            email,
            password,
            confirm_password,
        }
    }
}

pub async fn cmd_signup(
    backend: Arc<dyn HostedBackend>,
    input: SignUpInput,
) -> Result<AccountHandle> {
    println!(":: Creating account for {}", input.email);

    let controller =
        SignUpController::new(DraftStore::default(), backend, Arc::new(PrintNavigator));
    let fields = [
        (FieldName::DisplayName, input.display_name),
        (FieldName::Email, input.email),
        (FieldName::PasswordOne, input.password),
        (FieldName::PasswordTwo, input.confirm_password),
    ];
    for (field, value) in fields {
        controller.dispatch(FormCommand::ChangeField { field, value });
    }

    match controller.submit().await {
        SubmitOutcome::Completed { account } => {
            println!(":: Account created: {}", account.id);
            Ok(account)
        }
        SubmitOutcome::ProfileNotPersisted { account, error } => anyhow::bail!(
            "account {} was created but its profile was not saved: {error}",
            account.id
        ),
        other => match other.error() {
            Some(e) => anyhow::bail!("{e}"),
            None => anyhow::bail!("sign-up did not complete: {other:?}"),
        },
    }
}

pub async fn cmd_user_show(store: Arc<dyn HostedBackend>, account_id: &str) -> Result<()> {
    let session = BudgetSession::new(store);
    let overview = session
        .load_overview_for(account_id)
        .await
        .with_context(|| format!("Failed to load user {account_id}"))?;

    println!("Account:      {}", overview.account_id);
    println!("Display name: {}", overview.display_name);
    match overview.period {
        Some(p) => println!("Budget:       {}-{}", p.year(), p.month()),
        None => println!("Budget:       (none selected)"),
    }
    Ok(())
}

pub async fn cmd_budget_open(
    store: Arc<dyn HostedBackend>,
    account_id: &str,
    year: &str,
    month: &str,
) -> Result<serde_json::Value> {
    let period = BudgetPeriod::new(year, month)?;
    let session = BudgetSession::new(store);

    session
        .select_period(account_id, &period)
        .await
        .context("Failed to select budget period")?;
    let budget = session
        .open_budget(account_id, &period, &empty_budget())
        .await
        .context("Failed to open budget")?;

    println!(":: Budget {}", period.key());
    println!("{}", serde_json::to_string_pretty(&budget)?);
    Ok(budget)
}
