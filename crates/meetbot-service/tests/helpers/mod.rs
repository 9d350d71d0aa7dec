//! Shared test doubles for service scenario tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use meetbot_core::error::AppError;
use meetbot_core::result::AppResult;
use meetbot_core::traits::{AuthorizationStore, BotRegistrar, CreateBot};
use meetbot_core::types::{BotId, Principal, TaskRef};

/// One observed remote call, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Revoke(String),
    Grant(String),
    Toggle(String),
    Register(String),
    Activate(String, bool),
}

/// In-memory double for both remote traits.
///
/// Records every call in issue order and injects failures per principal
/// or per step.
#[derive(Debug)]
pub struct MockRemote {
    calls: Mutex<Vec<RemoteCall>>,
    fail_revoke: Mutex<HashSet<String>>,
    fail_grant: Mutex<HashSet<String>>,
    toggle_result: Mutex<AppResult<bool>>,
    register_result: Mutex<AppResult<String>>,
    activation_result: Mutex<AppResult<bool>>,
}

impl Default for MockRemote {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_revoke: Mutex::new(HashSet::new()),
            fail_grant: Mutex::new(HashSet::new()),
            toggle_result: Mutex::new(Ok(true)),
            register_result: Mutex::new(Ok("bot-1".to_string())),
            activation_result: Mutex::new(Ok(true)),
        }
    }
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the revoke call for `principal` fail.
    pub fn fail_revoke_of(&self, principal: &str) {
        self.fail_revoke.lock().unwrap().insert(principal.to_string());
    }

    /// Make the grant call for `principal` fail.
    pub fn fail_grant_of(&self, principal: &str) {
        self.fail_grant.lock().unwrap().insert(principal.to_string());
    }

    pub fn set_toggle_result(&self, result: AppResult<bool>) {
        *self.toggle_result.lock().unwrap() = result;
    }

    pub fn set_register_result(&self, result: AppResult<String>) {
        *self.register_result.lock().unwrap() = result;
    }

    pub fn set_activation_result(&self, result: AppResult<bool>) {
        *self.activation_result.lock().unwrap() = result;
    }

    /// Every call issued so far, in order.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of grant calls issued so far.
    pub fn grant_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::Grant(_)))
            .count()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AuthorizationStore for MockRemote {
    async fn grant_access(&self, _task: &TaskRef, principal: &Principal) -> AppResult<()> {
        self.record(RemoteCall::Grant(principal.as_str().to_string()));
        if self.fail_grant.lock().unwrap().contains(principal.as_str()) {
            return Err(AppError::external_service(format!(
                "grant of {principal} failed"
            )));
        }
        Ok(())
    }

    async fn revoke_access(&self, _task: &TaskRef, principal: &Principal) -> AppResult<()> {
        self.record(RemoteCall::Revoke(principal.as_str().to_string()));
        if self.fail_revoke.lock().unwrap().contains(principal.as_str()) {
            return Err(AppError::external_service(format!(
                "revoke of {principal} failed"
            )));
        }
        Ok(())
    }

    async fn toggle_restriction(&self, task: &TaskRef) -> AppResult<bool> {
        self.record(RemoteCall::Toggle(task.task_id.clone()));
        self.toggle_result.lock().unwrap().clone()
    }
}

#[async_trait]
impl BotRegistrar for MockRemote {
    async fn register_bot(&self, request: &CreateBot) -> AppResult<BotId> {
        self.record(RemoteCall::Register(request.username.clone()));
        self.register_result
            .lock()
            .unwrap()
            .clone()
            .map(BotId::from)
    }

    async fn set_bot_activated(&self, task: &TaskRef, activated: bool) -> AppResult<bool> {
        self.record(RemoteCall::Activate(task.task_id.clone(), activated));
        self.activation_result.lock().unwrap().clone()
    }
}
