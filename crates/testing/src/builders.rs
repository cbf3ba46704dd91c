//! Fluent builder pattern for constructing test data.

use basketball_domain::{PlayerDraft, PlayerRole, PlayerUpdate, TeamId};

use crate::fixtures::john_doe_draft;

/// Builder for creating PlayerDraft test instances
#[derive(Clone)]
pub struct PlayerDraftBuilder {
    draft: PlayerDraft,
}

impl PlayerDraftBuilder {
    pub fn new() -> Self {
        Self {
            draft: john_doe_draft(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.draft.surname = surname.into();
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.draft.age = age;
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.draft.height = height;
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.draft.weight = weight;
        self
    }

    pub fn with_citizenship(mut self, citizenship: impl Into<String>) -> Self {
        self.draft.citizenship = citizenship.into();
        self
    }

    pub fn with_role(mut self, role: PlayerRole) -> Self {
        self.draft.role = role;
        self
    }

    pub fn center(self) -> Self {
        self.with_role(PlayerRole::Center)
    }

    pub fn with_team(mut self, team_id: i64) -> Self {
        self.draft.team_id = TeamId::new(team_id);
        self
    }

    pub fn build(self) -> PlayerDraft {
        self.draft
    }
}

impl Default for PlayerDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for partial player updates
#[derive(Clone, Default)]
pub struct PlayerUpdateBuilder {
    update: PlayerUpdate,
}

impl PlayerUpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.update.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.update.age = Some(age);
        self
    }

    pub fn with_role(mut self, role: PlayerRole) -> Self {
        self.update.role = Some(role);
        self
    }

    pub fn with_team(mut self, team_id: i64) -> Self {
        self.update.team_id = Some(TeamId::new(team_id));
        self
    }

    pub fn build(self) -> PlayerUpdate {
        self.update
    }
}
