//! Tests for the player service
//!
//! The service is a pass-through, so these exercise the repository contract
//! through the use case seam the HTTP layer depends on.

use async_trait::async_trait;
use basketball_application::{
    OperationContext, PlayerRepositoryPort, PlayerService, PlayerUseCase,
};
use basketball_domain::{
    Player, PlayerDraft, PlayerError, PlayerId, PlayerResult, PlayerRole, PlayerUpdate,
};
use basketball_testing::{builders::*, fixtures::*, mocks::*};
use std::sync::Arc;
use std::time::Duration;

fn service_with_repo() -> (PlayerService<InMemoryPlayerRepository>, Arc<InMemoryPlayerRepository>) {
    let repo = Arc::new(InMemoryPlayerRepository::with_teams([TEST_TEAM_ID]));
    (PlayerService::new(Arc::clone(&repo)), repo)
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (service, _) = service_with_repo();
    let ctx = OperationContext::background();

    let created = service.create(&ctx, john_doe_draft()).await.unwrap();
    let fetched = service.get(&ctx, created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.name, "John");
    assert_eq!(fetched.role, PlayerRole::PointGuard);
}

#[tokio::test]
async fn test_sequential_creates_have_increasing_ids() {
    let (service, _) = service_with_repo();
    let ctx = OperationContext::background();

    let mut last = None;
    for draft in create_test_drafts(5) {
        let player = service.create(&ctx, draft).await.unwrap();
        if let Some(previous) = last {
            assert!(player.id > previous);
        }
        last = Some(player.id);
    }
}

#[tokio::test]
async fn test_create_with_unknown_team() {
    let (service, _) = service_with_repo();
    let draft = PlayerDraftBuilder::new().with_team(999).build();

    let result = service.create(&OperationContext::background(), draft).await;
    assert!(matches!(result, Err(PlayerError::TeamNotFound)));
}

#[tokio::test]
async fn test_missing_player_is_not_found() {
    let (service, _) = service_with_repo();
    let ctx = OperationContext::background();
    let missing = PlayerId::new(999);

    assert!(matches!(service.get(&ctx, missing).await, Err(PlayerError::NotFound)));
    assert!(matches!(
        service.update(&ctx, missing, PlayerUpdateBuilder::new().with_age(30).build()).await,
        Err(PlayerError::NotFound)
    ));
    assert!(matches!(service.delete(&ctx, missing).await, Err(PlayerError::NotFound)));
}

#[tokio::test]
async fn test_delete_twice() {
    let (service, _) = service_with_repo();
    let ctx = OperationContext::background();

    let player = service.create(&ctx, john_doe_draft()).await.unwrap();
    service.delete(&ctx, player.id).await.unwrap();

    assert!(matches!(service.delete(&ctx, player.id).await, Err(PlayerError::NotFound)));
    assert!(matches!(service.get(&ctx, player.id).await, Err(PlayerError::NotFound)));
}

#[tokio::test]
async fn test_update_team_to_unknown_team() {
    let (service, _) = service_with_repo();
    let ctx = OperationContext::background();

    let player = service.create(&ctx, john_doe_draft()).await.unwrap();
    let result = service
        .update(&ctx, player.id, PlayerUpdateBuilder::new().with_team(999).build())
        .await;

    assert!(matches!(result, Err(PlayerError::TeamNotFound)));
    assert_eq!(service.get(&ctx, player.id).await.unwrap(), player);
}

#[tokio::test]
async fn test_full_update_replaces_every_field() {
    let (service, repo) = service_with_repo();
    repo.register_team(basketball_domain::TeamId::new(2));
    let ctx = OperationContext::background();

    let player = service.create(&ctx, john_doe_draft()).await.unwrap();
    let replacement = PlayerDraftBuilder::new()
        .with_name("Jane")
        .with_surname("Roe")
        .with_age(30)
        .center()
        .with_team(2)
        .build();

    let updated = service
        .update(&ctx, player.id, PlayerUpdate::from(replacement.clone()))
        .await
        .unwrap();

    assert_eq!(updated, replacement.into_player(player.id));
}

#[tokio::test]
async fn test_list_pages() {
    let (service, _) = service_with_repo();
    let ctx = OperationContext::background();

    for draft in create_test_drafts(7) {
        service.create(&ctx, draft).await.unwrap();
    }

    assert_eq!(service.list(&ctx, 3, 1).await.unwrap().len(), 3);
    assert_eq!(service.list(&ctx, 3, 3).await.unwrap().len(), 1);
    assert!(service.list(&ctx, 3, 4).await.unwrap().is_empty());
    assert_eq!(service.list(&ctx, 50, 1).await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_invalid_pagination_rejected_before_store_access() {
    let (service, repo) = service_with_repo();
    let ctx = OperationContext::background();

    assert!(matches!(service.list(&ctx, 10, 0).await, Err(PlayerError::InvalidPageNumber)));
    assert!(matches!(service.list(&ctx, 0, 1).await, Err(PlayerError::InvalidPageSize)));
    assert!(matches!(service.list(&ctx, 0, 0).await, Err(PlayerError::InvalidPageNumber)));
    assert_eq!(repo.store_calls(), 0);
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    let (service, repo) = service_with_repo();
    repo.fail_with("connection reset by peer");

    let result = service.list(&OperationContext::background(), 10, 1).await;
    match result {
        Err(err @ PlayerError::Internal { .. }) => assert!(!err.is_sentinel()),
        other => panic!("expected internal error, got {:?}", other),
    }
}

/// Repository whose calls never complete
struct StalledRepository;

#[async_trait]
impl PlayerRepositoryPort for StalledRepository {
    async fn create(&self, _: &OperationContext, _: &PlayerDraft) -> PlayerResult<Player> {
        std::future::pending().await
    }

    async fn get(&self, _: &OperationContext, _: PlayerId) -> PlayerResult<Player> {
        std::future::pending().await
    }

    async fn list(&self, _: &OperationContext, _: u64, _: u64) -> PlayerResult<Vec<Player>> {
        std::future::pending().await
    }

    async fn update(&self, _: &OperationContext, _: PlayerId, _: &PlayerUpdate) -> PlayerResult<Player> {
        std::future::pending().await
    }

    async fn delete(&self, _: &OperationContext, _: PlayerId) -> PlayerResult<()> {
        std::future::pending().await
    }
}

#[tokio::test(start_paused = true)]
async fn test_deadline_cancels_stalled_store_call() {
    let service = PlayerService::new(Arc::new(StalledRepository));
    let ctx = OperationContext::new("req-42").with_timeout(Duration::from_secs(1));

    let result = service.get(&ctx, PlayerId::new(1)).await;
    match result {
        Err(err @ PlayerError::Cancelled { .. }) => {
            assert!(!err.is_sentinel());
            assert_eq!(err.to_string(), "get player: operation cancelled");
        }
        other => panic!("expected cancellation, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_deadline_bounds_every_store_operation() {
    let service = PlayerService::new(Arc::new(StalledRepository));
    let ctx = OperationContext::new("req-43").with_timeout(Duration::from_secs(1));
    let id = PlayerId::new(1);

    let outcomes = vec![
        ("create player", service.create(&ctx, john_doe_draft()).await.map(|_| ())),
        ("list players", service.list(&ctx, 50, 1).await.map(|_| ())),
        (
            "update player",
            service.update(&ctx, id, PlayerUpdate::default()).await.map(|_| ()),
        ),
        ("delete player", service.delete(&ctx, id).await),
    ];

    for (operation, result) in outcomes {
        match result {
            Err(err @ PlayerError::Cancelled { .. }) => {
                assert_eq!(err.to_string(), format!("{}: operation cancelled", operation));
            }
            other => panic!("expected {} to be cancelled, got {:?}", operation, other),
        }
    }
}

#[tokio::test]
async fn test_service_behind_trait_object() {
    let repo: Arc<dyn PlayerRepositoryPort> =
        Arc::new(InMemoryPlayerRepository::with_teams([TEST_TEAM_ID]));
    let use_case: Arc<dyn PlayerUseCase> = Arc::new(PlayerService::new(repo));

    let player = use_case
        .create(&OperationContext::background(), john_doe_draft())
        .await
        .unwrap();
    assert_eq!(player.id, PlayerId::new(1));
}
