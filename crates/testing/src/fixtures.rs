//! Test fixtures for generating players with realistic data.
//!
//! Every generated draft satisfies the HTTP schema bounds.

use basketball_domain::{PlayerDraft, PlayerRole, TeamId};
use fake::{
    faker::{
        address::en::CountryName,
        name::en::{FirstName, LastName},
    },
    Fake,
};

/// Team every default fixture belongs to
pub const TEST_TEAM_ID: i64 = 1;

/// Create a random player draft for the default test team
pub fn create_test_draft() -> PlayerDraft {
    create_test_draft_for_team(TEST_TEAM_ID)
}

/// Create a random player draft for a specific team
pub fn create_test_draft_for_team(team_id: i64) -> PlayerDraft {
    let roles = PlayerRole::all();
    PlayerDraft {
        name: bounded(FirstName().fake()),
        surname: bounded(LastName().fake()),
        age: (15..40).fake(),
        height: (1700..2300).fake(),
        weight: (60_000..140_000).fake(),
        citizenship: bounded(CountryName().fake()),
        role: roles[(0..roles.len()).fake::<usize>()],
        team_id: TeamId::new(team_id),
    }
}

/// The player used throughout the end-to-end scenarios
pub fn john_doe_draft() -> PlayerDraft {
    PlayerDraft {
        name: "John".to_string(),
        surname: "Doe".to_string(),
        age: 25,
        height: 1900,
        weight: 85_000,
        citizenship: "USA".to_string(),
        role: PlayerRole::PointGuard,
        team_id: TeamId::new(TEST_TEAM_ID),
    }
}

/// Create `count` random drafts for the default test team
pub fn create_test_drafts(count: usize) -> Vec<PlayerDraft> {
    (0..count).map(|_| create_test_draft()).collect()
}

fn bounded(value: String) -> String {
    value.chars().take(50).collect()
}
