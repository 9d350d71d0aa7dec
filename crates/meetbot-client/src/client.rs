//! HTTP client for the remote admin API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tracing::debug;
use uuid::Uuid;

use meetbot_core::config::remote::RemoteConfig;
use meetbot_core::error::{AppError, ErrorKind};
use meetbot_core::result::AppResult;
use meetbot_core::traits::{AuthorizationStore, BotRegistrar, CreateBot};
use meetbot_core::types::{BotId, Principal, TaskRef};
use meetbot_entity::access::AccessAction;

use crate::wire::{
    AccessUpdateRequest, AccessUpdateResponse, ErrorBody, RegisterBotRequest, RegisterBotResponse,
    RestrictionToggleRequest, RestrictionToggleResponse, TaskUpdateRequest, TaskUpdateResponse,
};

/// Client for the remote admin API.
///
/// Every request carries the configured timeout and a correlation id
/// header. Requests are issued exactly once — a failure (including a
/// timeout) is reported to the caller, never retried here, so sequencing
/// layers can reason about which calls reached the server.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    /// Base URL without trailing slash.
    base_url: String,
    /// Per-request timeout.
    timeout: Duration,
    /// Shared connection pool.
    http: reqwest::Client,
}

impl AdminApiClient {
    /// Creates a client from remote API configuration.
    pub fn new(config: &RemoteConfig) -> AppResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(config.timeout_seconds),
            http: reqwest::Client::new(),
        })
    }

    /// Path of the access grant/revoke endpoint.
    pub fn access_update_path() -> &'static str {
        "/update-bot-access"
    }

    /// Path of the restriction toggle endpoint.
    pub fn restriction_toggle_path() -> &'static str {
        "/toggle-bot-restriction"
    }

    /// Path of the identity registration endpoint.
    pub fn register_path() -> &'static str {
        "/register"
    }

    /// Path of the task update endpoint.
    pub fn tasks_path() -> &'static str {
        "/tasks"
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<Req, Res>(&self, method: Method, path: &str, payload: &Req) -> AppResult<Res>
    where
        Req: serde::Serialize + ?Sized,
        Res: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self
            .http
            .request(method, &url)
            .header("x-request-id", format!("req_{}", Uuid::new_v4().simple()))
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Request to {path} failed: {e}"),
                    e,
                )
            })?;
        decode_json_response(response, path).await
    }

    async fn update_access(
        &self,
        task: &TaskRef,
        principal: &Principal,
        action: AccessAction,
    ) -> AppResult<()> {
        let request = AccessUpdateRequest {
            owner_username: &task.owner,
            task_id: &task.task_id,
            target_username: principal.as_str(),
            action,
        };
        let ack: AccessUpdateResponse = self
            .send_json(Method::POST, Self::access_update_path(), &request)
            .await?;
        debug!(
            task = %task,
            principal = %principal,
            %action,
            message = ack.message.as_deref().unwrap_or(""),
            "Access updated"
        );
        Ok(())
    }
}

#[async_trait]
impl AuthorizationStore for AdminApiClient {
    async fn grant_access(&self, task: &TaskRef, principal: &Principal) -> AppResult<()> {
        self.update_access(task, principal, AccessAction::Add).await
    }

    async fn revoke_access(&self, task: &TaskRef, principal: &Principal) -> AppResult<()> {
        self.update_access(task, principal, AccessAction::Remove)
            .await
    }

    async fn toggle_restriction(&self, task: &TaskRef) -> AppResult<bool> {
        let request = RestrictionToggleRequest {
            owner_username: &task.owner,
            task_id: &task.task_id,
        };
        let response: RestrictionToggleResponse = self
            .send_json(Method::POST, Self::restriction_toggle_path(), &request)
            .await?;
        debug!(task = %task, restriction = response.restriction, "Restriction toggled");
        Ok(response.restriction)
    }
}

#[async_trait]
impl BotRegistrar for AdminApiClient {
    async fn register_bot(&self, request: &CreateBot) -> AppResult<BotId> {
        let wire = RegisterBotRequest::from(request);
        let response: RegisterBotResponse = self
            .send_json(Method::POST, Self::register_path(), &wire)
            .await?;
        debug!(username = %request.username, bot_id = %response.user_id, "Bot registered");
        Ok(BotId::from(response.user_id))
    }

    async fn set_bot_activated(&self, task: &TaskRef, activated: bool) -> AppResult<bool> {
        let request = TaskUpdateRequest {
            user_id: &task.owner,
            unique_task_id: &task.task_id,
            bot_activated: activated,
        };
        let response: TaskUpdateResponse = self
            .send_json(Method::PATCH, Self::tasks_path(), &request)
            .await?;
        Ok(response.success)
    }
}

fn normalize_base_url(base_url: &str) -> AppResult<String> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(AppError::configuration("Remote base URL is not set"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

async fn decode_json_response<T>(response: reqwest::Response, path: &str) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| {
        AppError::with_source(
            ErrorKind::ExternalService,
            format!("Failed to read response from {path}: {e}"),
            e,
        )
    })?;

    if !status.is_success() {
        return Err(http_error(status, &bytes, path));
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Malformed response from {path}: {e}"),
            e,
        )
    })
}

/// Map a non-2xx response to an error, preferring the server's
/// human-readable message field over the bare status code.
fn http_error(status: StatusCode, body: &[u8], path: &str) -> AppError {
    match serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
    {
        Some(message) => AppError::external_service(message),
        None => AppError::external_service(format!("{path} returned HTTP {status}")),
    }
}
