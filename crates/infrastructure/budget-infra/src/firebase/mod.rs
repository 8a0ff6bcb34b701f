//! Adapter for the hosted identity service and realtime database REST APIs.

pub mod database;
pub mod identity;

use std::sync::RwLock;

use bytes::Bytes;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use budget_core::{
    AccountHandle, AccountId, BackendError, BudgetDocument, BudgetPeriod, UserData, UserProfile,
};

use crate::net::join_segments;

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub database_url: String,
    pub auth_url: String,
}

/// Credentials of the signed-in account, appended to database requests.
#[derive(Clone)]
pub struct Session {
    pub account_id: AccountId,
    pub id_token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("id_token", &"<redacted>")
            .finish()
    }
}

pub struct FirebaseBackend {
    client: Client,
    auth_url: Url,
    database_url: Url,
    api_key: String,
    session: RwLock<Option<Session>>,
}

impl FirebaseBackend {
    pub fn new(client: Client, config: &FirebaseConfig) -> Result<Self, BackendError> {
        let parse = |what: &str, raw: &str| {
            Url::parse(raw.trim())
                .map_err(|e| BackendError::Decode(format!("invalid {what} url {raw}: {e}")))
        };

        Ok(Self {
            client,
            auth_url: parse("auth", &config.auth_url)?,
            database_url: parse("database", &config.database_url)?,
            api_key: config.api_key.trim().to_string(),
            session: RwLock::new(None),
        })
    }

    /// Starts with an existing session instead of one obtained by signing up.
    pub fn with_session(self, session: Session) -> Self {
        self.set_session(Some(session));
        self
    }

    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    fn set_session(&self, session: Option<Session>) {
        *self.session.write().unwrap_or_else(|p| p.into_inner()) = session;
    }

    pub fn current_account(&self) -> Option<AccountId> {
        self.session().map(|s| s.account_id)
    }

    // --- Identity ---

    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, BackendError> {
        let mut url = join_segments(&self.auth_url, &["v1", "accounts:signUp"])
            .map_err(BackendError::Decode)?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let body = identity::SignUpRequest {
            email,
            password,
            return_secure_token: true,
        };

        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("sign-up request failed: {e}")))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(format!("sign-up response failed: {e}")))?;

        if !status.is_success() {
            let err = identity::rejection_from_body(status, &bytes);
            tracing::debug!(code = ?err.code(), "sign-up rejected");
            return Err(err);
        }

        let parsed: identity::SignUpResponse = serde_json::from_slice(&bytes)
            .map_err(|e| BackendError::Decode(format!("sign-up response: {e}")))?;

        tracing::debug!(account_id = %parsed.local_id, "account created");
        self.set_session(Some(Session {
            account_id: parsed.local_id.clone(),
            id_token: parsed.id_token,
        }));
        Ok(AccountHandle::new(parsed.local_id))
    }

    // --- Realtime database ---

    /// Writes `{displayName}` to `users/{id}`, replacing whatever was there.
    pub async fn persist_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        self.put(&database::user_path(&profile.account_id), profile)
            .await
    }

    pub async fn get_user_data(&self, account_id: &str) -> Result<Option<UserData>, BackendError> {
        self.get(&database::user_path(account_id)).await
    }

    pub async fn set_budget_year(&self, account_id: &str, year: &str) -> Result<(), BackendError> {
        self.put(
            &database::user_child_path(account_id, database::BUDGET_YEAR),
            &year,
        )
        .await
    }

    pub async fn set_budget_month(
        &self,
        account_id: &str,
        month: &str,
    ) -> Result<(), BackendError> {
        self.put(
            &database::user_child_path(account_id, database::BUDGET_MONTH),
            &month,
        )
        .await
    }

    pub async fn get_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
    ) -> Result<Option<BudgetDocument>, BackendError> {
        self.get(&database::budget_path(account_id, period)).await
    }

    pub async fn init_budget(
        &self,
        account_id: &str,
        period: &BudgetPeriod,
        budget: &BudgetDocument,
    ) -> Result<(), BackendError> {
        self.put(&database::budget_path(account_id, period), budget)
            .await
    }

    fn database_request_url(&self, path: &[String]) -> Result<Url, BackendError> {
        let segs = database::rest_segments(path);
        let refs: Vec<&str> = segs.iter().map(String::as_str).collect();
        let mut url = join_segments(&self.database_url, &refs).map_err(BackendError::Decode)?;
        if let Some(session) = self.session() {
            url.query_pairs_mut().append_pair("auth", &session.id_token);
        }
        Ok(url)
    }

    async fn database_call(
        &self,
        method: Method,
        path: &[String],
        body: Option<serde_json::Value>,
    ) -> Result<Bytes, BackendError> {
        let url = self.database_request_url(path)?;
        let location = path.join("/");

        let mut req = self.client.request(method.clone(), url);
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("{method} {location} failed: {e}")))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(format!("{method} {location} body: {e}")))?;

        if !status.is_success() {
            return Err(database::rejection_from_body(status, &bytes));
        }
        Ok(bytes)
    }

    async fn get<T: DeserializeOwned>(&self, path: &[String]) -> Result<Option<T>, BackendError> {
        let bytes = self.database_call(Method::GET, path, None).await?;
        // Absent locations read back as JSON `null`.
        serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|e| BackendError::Decode(format!("{}: {e}", path.join("/"))))
    }

    async fn put<T: Serialize + ?Sized>(&self, path: &[String], value: &T) -> Result<(), BackendError> {
        let body = serde_json::to_value(value)
            .map_err(|e| BackendError::Decode(format!("{}: {e}", path.join("/"))))?;
        self.database_call(Method::PUT, path, Some(body)).await?;
        Ok(())
    }
}
