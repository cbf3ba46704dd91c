//! Player entity and the shapes used to create and modify it.

use crate::identifiers::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Court position of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    /// Point guard
    #[serde(rename = "PG")]
    PointGuard,
    /// Shooting guard
    #[serde(rename = "SG")]
    ShootingGuard,
    /// Small forward
    #[serde(rename = "SF")]
    SmallForward,
    /// Power forward
    #[serde(rename = "PF")]
    PowerForward,
    /// Center
    #[serde(rename = "C")]
    Center,
}

impl PlayerRole {
    /// Every role, in the order they are listed on a roster sheet
    pub fn all() -> &'static [PlayerRole] {
        &[
            Self::PointGuard,
            Self::ShootingGuard,
            Self::SmallForward,
            Self::PowerForward,
            Self::Center,
        ]
    }

    /// Position code as stored in the `players.role` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointGuard => "PG",
            Self::ShootingGuard => "SG",
            Self::SmallForward => "SF",
            Self::PowerForward => "PF",
            Self::Center => "C",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position code outside the fixed role set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for PlayerRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A stored player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub surname: String,
    pub age: i32,
    /// Height in millimeters
    pub height: i32,
    /// Weight in grams
    pub weight: i32,
    pub citizenship: String,
    pub role: PlayerRole,
    pub team_id: TeamId,
}

/// Caller-supplied fields needed to create a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub citizenship: String,
    pub role: PlayerRole,
    pub team_id: TeamId,
}

impl PlayerDraft {
    /// Attach the identifier the store assigned to this draft.
    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            surname: self.surname,
            age: self.age,
            height: self.height,
            weight: self.weight,
            citizenship: self.citizenship,
            role: self.role,
            team_id: self.team_id,
        }
    }
}

/// Changes to apply to a stored player.
///
/// When every field is set this is a full replacement. A field left as `None`
/// keeps the value currently stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub citizenship: Option<String>,
    pub role: Option<PlayerRole>,
    pub team_id: Option<TeamId>,
}

impl PlayerUpdate {
    /// Produce the player that results from applying this update to `current`.
    pub fn apply_to(&self, current: &Player) -> Player {
        Player {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            surname: self
                .surname
                .clone()
                .unwrap_or_else(|| current.surname.clone()),
            age: self.age.unwrap_or(current.age),
            height: self.height.unwrap_or(current.height),
            weight: self.weight.unwrap_or(current.weight),
            citizenship: self
                .citizenship
                .clone()
                .unwrap_or_else(|| current.citizenship.clone()),
            role: self.role.unwrap_or(current.role),
            team_id: self.team_id.unwrap_or(current.team_id),
        }
    }
}

impl From<PlayerDraft> for PlayerUpdate {
    fn from(draft: PlayerDraft) -> Self {
        Self {
            name: Some(draft.name),
            surname: Some(draft.surname),
            age: Some(draft.age),
            height: Some(draft.height),
            weight: Some(draft.weight),
            citizenship: Some(draft.citizenship),
            role: Some(draft.role),
            team_id: Some(draft.team_id),
        }
    }
}
