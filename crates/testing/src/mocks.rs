//! Mock implementations for repositories.
//!
//! Provides in-memory mocks for testing without database dependencies.

use async_trait::async_trait;
use basketball_application::{OperationContext, PlayerRepositoryPort};
use basketball_common::PageRequest;
use basketball_domain::{
    Player, PlayerDraft, PlayerError, PlayerId, PlayerResult, PlayerUpdate, TeamId,
};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/// In-memory player repository.
///
/// Mirrors the Postgres repository: ids come from a monotonically increasing
/// sequence and are never reused, writes referencing an unregistered team fail
/// with [`PlayerError::TeamNotFound`], and invalid pagination is rejected
/// before the store is touched.
pub struct InMemoryPlayerRepository {
    players: RwLock<BTreeMap<PlayerId, Player>>,
    teams: RwLock<HashSet<TeamId>>,
    next_id: AtomicI64,
    store_calls: AtomicUsize,
    failure: RwLock<Option<String>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(BTreeMap::new()),
            teams: RwLock::new(HashSet::new()),
            next_id: AtomicI64::new(1),
            store_calls: AtomicUsize::new(0),
            failure: RwLock::new(None),
        }
    }

    /// Repository with the given teams registered
    pub fn with_teams(teams: impl IntoIterator<Item = i64>) -> Self {
        let repo = Self::new();
        for team in teams {
            repo.register_team(TeamId::new(team));
        }
        repo
    }

    pub fn register_team(&self, team_id: TeamId) {
        self.teams.write().insert(team_id);
    }

    /// Make every subsequent store access fail with an opaque error.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write() = Some(message.into());
    }

    /// Stop failing store accesses.
    pub fn recover(&self) {
        *self.failure.write() = None;
    }

    /// Number of calls that reached the store
    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }

    fn access_store(&self, operation: &'static str) -> PlayerResult<()> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.read().as_ref() {
            Some(message) => Err(PlayerError::internal(operation, message.clone())),
            None => Ok(()),
        }
    }

    fn ensure_team(&self, team_id: TeamId) -> PlayerResult<()> {
        if self.teams.read().contains(&team_id) {
            Ok(())
        } else {
            Err(PlayerError::TeamNotFound)
        }
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepositoryPort for InMemoryPlayerRepository {
    async fn create(&self, _ctx: &OperationContext, draft: &PlayerDraft) -> PlayerResult<Player> {
        self.access_store("create player")?;
        self.ensure_team(draft.team_id)?;

        let id = PlayerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let player = draft.clone().into_player(id);
        self.players.write().insert(id, player.clone());

        Ok(player)
    }

    async fn get(&self, _ctx: &OperationContext, id: PlayerId) -> PlayerResult<Player> {
        self.access_store("get player")?;
        self.players
            .read()
            .get(&id)
            .cloned()
            .ok_or(PlayerError::NotFound)
    }

    async fn list(
        &self,
        _ctx: &OperationContext,
        page_size: u64,
        page_number: u64,
    ) -> PlayerResult<Vec<Player>> {
        let page = PageRequest::new(page_size, page_number)?;
        self.access_store("list players")?;

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        Ok(self
            .players
            .read()
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        _ctx: &OperationContext,
        id: PlayerId,
        update: &PlayerUpdate,
    ) -> PlayerResult<Player> {
        self.access_store("update player")?;

        let mut players = self.players.write();
        let current = players.get(&id).ok_or(PlayerError::NotFound)?;
        if let Some(team_id) = update.team_id {
            self.ensure_team(team_id)?;
        }

        let updated = update.apply_to(current);
        players.insert(id, updated.clone());

        Ok(updated)
    }

    async fn delete(&self, _ctx: &OperationContext, id: PlayerId) -> PlayerResult<()> {
        self.access_store("delete player")?;
        self.players
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(PlayerError::NotFound)
    }
}
