//! Store modal and settings form against the mock backend.

use storepee_core::StoreFormValues;
use storepee_dashboard::components::{ApiAlert, StoreModal};
use storepee_dashboard::forms::{
    DeleteOutcome, GENERIC_FAILURE, Saved, StoreForm, StoreFormController, SubmitOutcome,
};
use storepee_dashboard::navigation::DashboardRoute;
use storepee_dashboard::notify::Toast;
use storepee_integration_tests::{NavEvent, RecordedRequest, TestContext};

// =============================================================================
// Store modal
// =============================================================================

#[tokio::test]
async fn test_store_modal_creates_and_opens_store() {
    let ctx = TestContext::new().await;
    let mut modal = StoreModal::new();
    modal.sync_with_store_count(0);

    let outcome = modal
        .submit(&ctx.services, StoreFormValues::new("Main Street"))
        .await
        .expect("modal is open");

    let SubmitOutcome::Saved(Saved::Created(Some(id))) = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    assert_eq!(ctx.backend.store(id).map(|s| s.name), Some("Main Street".to_string()));
    assert_eq!(
        ctx.services.navigator.events(),
        vec![NavEvent::Assign(DashboardRoute::Store(id))]
    );
}

#[tokio::test]
async fn test_signed_out_create_fails() {
    let ctx = TestContext::signed_out().await;
    let mut controller = StoreFormController::new(StoreForm, None);

    let outcome = controller
        .submit(&ctx.services, StoreFormValues::new("Main Street"))
        .await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ref e) if e.status() == Some(401)));
    assert_eq!(
        ctx.services.notifier.toasts(),
        vec![Toast::error(GENERIC_FAILURE)]
    );
    assert!(ctx.services.navigator.events().is_empty());
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn test_rename_store_stays_on_settings() {
    let ctx = TestContext::new().await;
    let store = ctx.seed_store("Main Street");
    let mut controller = StoreFormController::new(StoreForm, Some(&store));

    assert_eq!(controller.copy().title, "Settings");
    assert_eq!(controller.defaults().name, "Main Street");

    controller
        .submit(&ctx.services, StoreFormValues::new("Outlet"))
        .await
        .into_result()
        .expect("rename succeeds");

    assert_eq!(ctx.backend.store(store.id).map(|s| s.name), Some("Outlet".to_string()));
    assert_eq!(ctx.services.navigator.events(), vec![NavEvent::Refresh]);
    assert_eq!(ctx.services.notifier.toasts(), vec![Toast::success("Store updated.")]);
}

#[tokio::test]
async fn test_delete_store_with_billboards_is_blocked() {
    let ctx = TestContext::new().await;
    let store = ctx.seed_store("Main Street");
    ctx.seed_billboard(store.id, "Spring Sale");
    let mut controller = StoreFormController::new(StoreForm, Some(&store));

    controller.request_delete();
    let outcome = controller.confirm_delete(&ctx.services).await;

    match outcome {
        DeleteOutcome::Failed(e) => assert!(e.is_blocked_by_dependents()),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        ctx.backend.requests(),
        vec![RecordedRequest {
            method: "DELETE".to_string(),
            path: format!("/api/stores/{}", store.id),
        }]
    );
    assert!(ctx.backend.store(store.id).is_some());
    assert_eq!(
        ctx.services.notifier.toasts(),
        vec![Toast::error(
            "Make sure you removed all products and categories first."
        )]
    );
    assert!(ctx.services.navigator.events().is_empty());
    assert!(!controller.is_confirm_open());
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_delete_empty_store_goes_home() {
    let ctx = TestContext::new().await;
    let store = ctx.seed_store("Main Street");
    let mut controller = StoreFormController::new(StoreForm, Some(&store));

    controller.request_delete();
    controller
        .confirm_delete(&ctx.services)
        .await
        .into_result()
        .expect("delete succeeds");

    assert!(ctx.backend.store(store.id).is_none());
    assert_eq!(
        ctx.services.navigator.events(),
        vec![NavEvent::Refresh, NavEvent::Push(DashboardRoute::Root)]
    );
    assert_eq!(ctx.services.notifier.toasts(), vec![Toast::success("Deleted.")]);
}

#[tokio::test]
async fn test_api_alert_points_at_backend() {
    let ctx = TestContext::new().await;
    let store = ctx.seed_store("Main Street");
    let origin = ctx.base_url.origin().ascii_serialization();

    let alert = ApiAlert::store_api(&origin, store.id);

    assert_eq!(alert.description, format!("{origin}/api/{}", store.id));
}
