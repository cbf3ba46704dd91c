//! Outbound ports implemented by the infrastructure layer.

use crate::OperationContext;
use async_trait::async_trait;
use basketball_domain::{Player, PlayerDraft, PlayerId, PlayerResult, PlayerUpdate};

/// Player persistence.
///
/// Implementations classify "no such player" as [`PlayerError::NotFound`] and
/// a reference to a missing team as [`PlayerError::TeamNotFound`]. `list`
/// rejects a page number below 1, then a page size below 1, before touching
/// the store. Every other failure is [`PlayerError::Internal`].
///
/// Implementations do not check the context deadline themselves. Callers bound
/// each call with [`OperationContext::run`], which drops the returned future
/// once the deadline passes and so aborts the in-flight store query.
///
/// [`PlayerError::NotFound`]: basketball_domain::PlayerError::NotFound
/// [`PlayerError::TeamNotFound`]: basketball_domain::PlayerError::TeamNotFound
/// [`PlayerError::Internal`]: basketball_domain::PlayerError::Internal
#[async_trait]
pub trait PlayerRepositoryPort: Send + Sync {
    /// Persist a new player and return it with its store-assigned id.
    async fn create(&self, ctx: &OperationContext, draft: &PlayerDraft) -> PlayerResult<Player>;

    async fn get(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<Player>;

    /// One page of players in unspecified order. Past the end yields an empty vec.
    async fn list(
        &self,
        ctx: &OperationContext,
        page_size: u64,
        page_number: u64,
    ) -> PlayerResult<Vec<Player>>;

    /// Apply `update` and return the stored result.
    async fn update(
        &self,
        ctx: &OperationContext,
        id: PlayerId,
        update: &PlayerUpdate,
    ) -> PlayerResult<Player>;

    async fn delete(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<()>;
}
