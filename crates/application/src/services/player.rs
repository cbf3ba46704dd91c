//! Player Service
//!
//! Pass-through use case over the player repository. It adds the operation
//! span and enforces the context deadline; it neither validates nor
//! transforms.

use crate::{OperationContext, PlayerRepositoryPort};
use async_trait::async_trait;
use basketball_domain::{Player, PlayerDraft, PlayerId, PlayerResult, PlayerUpdate};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Player use case as seen by the HTTP layer
#[async_trait]
pub trait PlayerUseCase: Send + Sync {
    async fn create(&self, ctx: &OperationContext, draft: PlayerDraft) -> PlayerResult<Player>;
    async fn get(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<Player>;
    async fn list(
        &self,
        ctx: &OperationContext,
        page_size: u64,
        page_number: u64,
    ) -> PlayerResult<Vec<Player>>;
    async fn update(
        &self,
        ctx: &OperationContext,
        id: PlayerId,
        update: PlayerUpdate,
    ) -> PlayerResult<Player>;
    async fn delete(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<()>;
}

/// Player service implementation
pub struct PlayerService<R>
where
    R: PlayerRepositoryPort + ?Sized,
{
    repository: Arc<R>,
}

impl<R> PlayerService<R>
where
    R: PlayerRepositoryPort + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PlayerUseCase for PlayerService<R>
where
    R: PlayerRepositoryPort + ?Sized,
{
    #[instrument(skip(self, ctx, draft), fields(request_id = %ctx.request_id(), team_id = %draft.team_id))]
    async fn create(&self, ctx: &OperationContext, draft: PlayerDraft) -> PlayerResult<Player> {
        let player = ctx
            .run("create player", self.repository.create(ctx, &draft))
            .await?;

        info!(player_id = %player.id, "Player created");

        Ok(player)
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn get(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<Player> {
        ctx.run("get player", self.repository.get(ctx, id)).await
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn list(
        &self,
        ctx: &OperationContext,
        page_size: u64,
        page_number: u64,
    ) -> PlayerResult<Vec<Player>> {
        let players = ctx
            .run(
                "list players",
                self.repository.list(ctx, page_size, page_number),
            )
            .await?;

        debug!(count = players.len(), "Listed players");

        Ok(players)
    }

    #[instrument(skip(self, ctx, update), fields(request_id = %ctx.request_id()))]
    async fn update(
        &self,
        ctx: &OperationContext,
        id: PlayerId,
        update: PlayerUpdate,
    ) -> PlayerResult<Player> {
        let player = ctx
            .run("update player", self.repository.update(ctx, id, &update))
            .await?;

        info!(player_id = %player.id, "Player updated");

        Ok(player)
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn delete(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<()> {
        ctx.run("delete player", self.repository.delete(ctx, id))
            .await?;

        info!(player_id = %id, "Player deleted");

        Ok(())
    }
}
