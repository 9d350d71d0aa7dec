//! Scenario tests for the restriction toggle, the provisioning saga,
//! and the console's notice contract.

mod helpers;

use std::sync::Arc;

use helpers::{MockRemote, RemoteCall};

use meetbot_core::error::AppError;
use meetbot_core::types::Principal;
use meetbot_entity::access::AccessList;
use meetbot_entity::bot::{ActivationState, OwnerProfile};
use meetbot_entity::notice::NoticeLevel;
use meetbot_entity::task::Task;
use meetbot_service::console::AdminConsole;
use meetbot_service::provision::{ProvisionError, ProvisionService};
use meetbot_service::registry::TaskRegistry;
use meetbot_service::restriction::RestrictionService;

fn owner() -> OwnerProfile {
    OwnerProfile {
        username: "admin".to_string(),
        mobile_no: Some("1234567890".to_string()),
        api_key: "key-123".to_string(),
    }
}

fn seeded_registry() -> Arc<TaskRegistry> {
    let registry = Arc::new(TaskRegistry::new());
    registry.insert(Task::new("admin", "task-1", "Weekly sync"));
    registry.insert(Task::new("admin", "task-2", "Retro"));
    registry
}

fn console(remote: &Arc<MockRemote>, registry: &Arc<TaskRegistry>) -> AdminConsole {
    AdminConsole::new(remote.clone(), remote.clone(), registry.clone())
}

#[tokio::test]
async fn test_toggle_updates_only_target_task() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let service = RestrictionService::new(remote.clone(), registry.clone());
    let task = registry.get("task-1").unwrap();

    let restriction = service.toggle(&task.reference()).await.unwrap();

    assert!(restriction);
    assert!(registry.get("task-1").unwrap().meeting.restriction);
    assert!(!registry.get("task-2").unwrap().meeting.restriction);
    assert_eq!(remote.calls(), vec![RemoteCall::Toggle("task-1".to_string())]);
}

#[tokio::test]
async fn test_toggle_failure_leaves_cache_untouched() {
    let remote = Arc::new(MockRemote::new());
    remote.set_toggle_result(Err(AppError::external_service("boom")));
    let registry = seeded_registry();
    let service = RestrictionService::new(remote.clone(), registry.clone());
    let task = registry.get("task-1").unwrap();

    service.toggle(&task.reference()).await.unwrap_err();

    assert!(!registry.get("task-1").unwrap().meeting.restriction);
}

#[tokio::test]
async fn test_provision_success_runs_both_steps() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let service = ProvisionService::new(remote.clone(), registry.clone());
    let task = registry.get("task-1").unwrap();

    let provision = service.create_bot(&task, &owner()).await.unwrap();

    assert!(provision.is_activated());
    assert_eq!(provision.bot_id.as_str(), "bot-1");
    assert!(registry.get("task-1").unwrap().meeting.bot_activated);
    assert_eq!(
        remote.calls(),
        vec![
            RemoteCall::Register("task-1".to_string()),
            RemoteCall::Activate("task-1".to_string(), true),
        ]
    );
}

#[tokio::test]
async fn test_provision_activation_failure_keeps_partial_state() {
    let remote = Arc::new(MockRemote::new());
    remote.set_activation_result(Err(AppError::external_service("boom")));
    let registry = seeded_registry();
    let service = ProvisionService::new(remote.clone(), registry.clone());
    let task = registry.get("task-1").unwrap();

    let err = service.create_bot(&task, &owner()).await.unwrap_err();

    match err {
        ProvisionError::Activation { provision, .. } => {
            assert_eq!(provision.activation, ActivationState::Pending);
            assert_eq!(provision.bot_id.as_str(), "bot-1");
        }
        other => panic!("expected activation failure, got {other:?}"),
    }
    assert!(!registry.get("task-1").unwrap().meeting.bot_activated);
}

#[tokio::test]
async fn test_provision_declined_activation_is_partial_state() {
    let remote = Arc::new(MockRemote::new());
    remote.set_activation_result(Ok(false));
    let registry = seeded_registry();
    let service = ProvisionService::new(remote.clone(), registry.clone());
    let task = registry.get("task-1").unwrap();

    let err = service.create_bot(&task, &owner()).await.unwrap_err();

    assert!(matches!(err, ProvisionError::Activation { .. }));
    assert!(!registry.get("task-1").unwrap().meeting.bot_activated);
}

#[tokio::test]
async fn test_provision_registration_failure_stops_saga() {
    let remote = Arc::new(MockRemote::new());
    remote.set_register_result(Err(AppError::external_service(
        "Email already registered",
    )));
    let registry = seeded_registry();
    let service = ProvisionService::new(remote.clone(), registry.clone());
    let task = registry.get("task-1").unwrap();

    let err = service.create_bot(&task, &owner()).await.unwrap_err();

    assert!(matches!(err, ProvisionError::Registration(_)));
    assert_eq!(remote.calls(), vec![RemoteCall::Register("task-1".to_string())]);
}

#[tokio::test]
async fn test_console_save_reports_success_notice() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let mut editor = console.open_access_editor("task-1").unwrap();
    editor.add_principal(Principal::parse("alice@example.com").unwrap());
    let notice = console.save_access_list(&mut editor).await;

    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Access list updated successfully");
}

#[tokio::test]
async fn test_console_save_reports_generic_failure_notice() {
    let remote = Arc::new(MockRemote::new());
    remote.fail_grant_of("alice@example.com");
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let mut editor = console.open_access_editor("task-1").unwrap();
    editor.add_principal(Principal::parse("alice@example.com").unwrap());
    let notice = console.save_access_list(&mut editor).await;

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to update access list");
}

#[tokio::test]
async fn test_console_editor_opens_over_applied_list() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let editor = console.open_access_editor("task-1").unwrap();
    // New meetings seed access with their owner.
    let members: Vec<_> = editor.draft().iter().map(|p| p.as_str().to_string()).collect();
    assert_eq!(members, vec!["admin".to_string()]);

    assert!(console.open_access_editor("missing").is_err());
}

#[tokio::test]
async fn test_console_toggle_notices_follow_server_flag() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let notice = console.toggle_restriction("task-1").await;
    assert_eq!(notice.message, "Access restriction enabled");

    remote.set_toggle_result(Ok(false));
    let notice = console.toggle_restriction("task-1").await;
    assert_eq!(notice.message, "Access restriction disabled");

    remote.set_toggle_result(Err(AppError::external_service("boom")));
    let notice = console.toggle_restriction("task-1").await;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to toggle access restriction");
}

#[tokio::test]
async fn test_console_create_bot_notices() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let notice = console.create_bot("task-1", &owner()).await;
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Bot assistant created successfully");

    let notice = console.create_bot("missing", &owner()).await;
    assert_eq!(notice.message, "Meeting data not available");
}

#[tokio::test]
async fn test_console_create_bot_surfaces_server_message() {
    let remote = Arc::new(MockRemote::new());
    remote.set_register_result(Err(AppError::external_service(
        "Email already registered",
    )));
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let notice = console.create_bot("task-1", &owner()).await;

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Email already registered");
}

#[tokio::test]
async fn test_console_create_bot_activation_failure_is_generic() {
    let remote = Arc::new(MockRemote::new());
    remote.set_activation_result(Ok(false));
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let notice = console.create_bot("task-1", &owner()).await;

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to create bot assistant");
}

#[tokio::test]
async fn test_console_save_applies_removals_to_cache() {
    let remote = Arc::new(MockRemote::new());
    let registry = seeded_registry();
    let console = console(&remote, &registry);

    let mut editor = console.open_access_editor("task-2").unwrap();
    editor.remove_principal(&Principal::parse("admin").unwrap());
    console.save_access_list(&mut editor).await;

    assert_eq!(
        registry.get("task-2").unwrap().meeting.access_list,
        AccessList::new()
    );
}
