//! Integration tests for the Postgres player repository
//!
//! These tests require a PostgreSQL database and are marked with #[ignore] for CI.
//! Run with: DATABASE_URL=postgres://... cargo test --test player_repository_tests -- --ignored --test-threads=1

use basketball_application::{OperationContext, PlayerRepositoryPort};
use basketball_domain::{PlayerError, PlayerId, PlayerRole};
use basketball_infrastructure::{DatabaseConfig, DatabasePool, PgPlayerRepository};
use basketball_testing::{builders::*, database::TestDatabase, fixtures::*};

async fn setup() -> (TestDatabase, PgPlayerRepository, i64) {
    let db = TestDatabase::from_env().await.unwrap();
    db.clean().await.unwrap();
    let team = db.insert_team("Lakers").await.unwrap();
    let repo = PgPlayerRepository::new(db.pool().clone());
    (db, repo, team.get())
}

#[tokio::test]
#[ignore]
async fn test_create_and_get() {
    let (_db, repo, team) = setup().await;
    let ctx = OperationContext::background();

    let draft = PlayerDraftBuilder::new().with_team(team).build();
    let created = repo.create(&ctx, &draft).await.unwrap();
    let fetched = repo.get(&ctx, created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.role, PlayerRole::PointGuard);
}

#[tokio::test]
#[ignore]
async fn test_sequential_ids_increase() {
    let (_db, repo, team) = setup().await;
    let ctx = OperationContext::background();

    let first = repo.create(&ctx, &create_test_draft_for_team(team)).await.unwrap();
    let second = repo.create(&ctx, &create_test_draft_for_team(team)).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
#[ignore]
async fn test_unknown_team_is_team_not_found() {
    let (_db, repo, team) = setup().await;
    let ctx = OperationContext::background();

    let result = repo.create(&ctx, &create_test_draft_for_team(team + 1000)).await;
    assert!(matches!(result, Err(PlayerError::TeamNotFound)));

    let player = repo.create(&ctx, &create_test_draft_for_team(team)).await.unwrap();
    let update = PlayerUpdateBuilder::new().with_team(team + 1000).build();
    let result = repo.update(&ctx, player.id, &update).await;
    assert!(matches!(result, Err(PlayerError::TeamNotFound)));
}

#[tokio::test]
#[ignore]
async fn test_missing_rows_are_not_found() {
    let (_db, repo, _team) = setup().await;
    let ctx = OperationContext::background();
    let missing = PlayerId::new(999_999);

    assert!(matches!(repo.get(&ctx, missing).await, Err(PlayerError::NotFound)));
    assert!(matches!(
        repo.update(&ctx, missing, &PlayerUpdateBuilder::new().with_age(30).build()).await,
        Err(PlayerError::NotFound)
    ));
    assert!(matches!(repo.delete(&ctx, missing).await, Err(PlayerError::NotFound)));
}

#[tokio::test]
#[ignore]
async fn test_partial_update_keeps_other_fields() {
    let (_db, repo, team) = setup().await;
    let ctx = OperationContext::background();

    let player = repo.create(&ctx, &create_test_draft_for_team(team)).await.unwrap();
    let update = PlayerUpdateBuilder::new().with_name("Jane").with_role(PlayerRole::Center).build();
    let updated = repo.update(&ctx, player.id, &update).await.unwrap();

    assert_eq!(updated, update.apply_to(&player));
}

#[tokio::test]
#[ignore]
async fn test_delete_twice() {
    let (_db, repo, team) = setup().await;
    let ctx = OperationContext::background();

    let player = repo.create(&ctx, &create_test_draft_for_team(team)).await.unwrap();
    repo.delete(&ctx, player.id).await.unwrap();
    assert!(matches!(repo.delete(&ctx, player.id).await, Err(PlayerError::NotFound)));
}

#[tokio::test]
#[ignore]
async fn test_list_pages() {
    let (_db, repo, team) = setup().await;
    let ctx = OperationContext::background();

    for _ in 0..5 {
        repo.create(&ctx, &create_test_draft_for_team(team)).await.unwrap();
    }

    assert_eq!(repo.list(&ctx, 2, 1).await.unwrap().len(), 2);
    assert_eq!(repo.list(&ctx, 2, 3).await.unwrap().len(), 1);
    assert!(repo.list(&ctx, 2, 4).await.unwrap().is_empty());
    assert!(matches!(repo.list(&ctx, 2, 0).await, Err(PlayerError::InvalidPageNumber)));
    assert!(matches!(repo.list(&ctx, 0, 1).await, Err(PlayerError::InvalidPageSize)));
}

#[tokio::test]
#[ignore]
async fn test_pool_ping_and_health() {
    let config = DatabaseConfig::from_env().unwrap();
    let pool = DatabasePool::new(&config).await.unwrap();

    pool.ping().await.unwrap();
    assert!(pool.health_check().await.healthy);

    pool.close().await;
    assert!(pool.ping().await.is_err());
}
