//! Tests for player update semantics
//!
//! An update with every field set replaces the player; an update with fields
//! left unset keeps the stored values for those fields.

use basketball_domain::{Player, PlayerDraft, PlayerId, PlayerRole, PlayerUpdate, TeamId};
use proptest::prelude::*;

fn stored_player() -> Player {
    PlayerDraft {
        name: "John".to_string(),
        surname: "Doe".to_string(),
        age: 25,
        height: 1900,
        weight: 85000,
        citizenship: "USA".to_string(),
        role: PlayerRole::PointGuard,
        team_id: TeamId::new(1),
    }
    .into_player(PlayerId::new(10))
}

#[test]
fn test_empty_update_is_identity() {
    let current = stored_player();
    assert_eq!(PlayerUpdate::default().apply_to(&current), current);
}

#[test]
fn test_update_never_changes_identifier() {
    let current = stored_player();
    let update = PlayerUpdate {
        name: Some("Jane".to_string()),
        ..Default::default()
    };
    assert_eq!(update.apply_to(&current).id, PlayerId::new(10));
}

#[test]
fn test_team_only_update() {
    let current = stored_player();
    let update = PlayerUpdate {
        team_id: Some(TeamId::new(999)),
        ..Default::default()
    };

    let updated = update.apply_to(&current);
    assert_eq!(updated.team_id, TeamId::new(999));
    assert_eq!(updated.surname, "Doe");
    assert_eq!(updated.weight, 85000);
}

fn role_strategy() -> impl Strategy<Value = PlayerRole> {
    prop::sample::select(PlayerRole::all().to_vec())
}

proptest! {
    #[test]
    fn test_set_fields_win_unset_fields_keep(
        age in proptest::option::of(15i32..=60),
        height in proptest::option::of(1000i32..=2600),
        role in proptest::option::of(role_strategy()),
        team in proptest::option::of(1i64..10_000),
    ) {
        let current = stored_player();
        let update = PlayerUpdate {
            age,
            height,
            role,
            team_id: team.map(TeamId::new),
            ..Default::default()
        };

        let updated = update.apply_to(&current);
        prop_assert_eq!(updated.age, age.unwrap_or(current.age));
        prop_assert_eq!(updated.height, height.unwrap_or(current.height));
        prop_assert_eq!(updated.role, role.unwrap_or(current.role));
        prop_assert_eq!(updated.team_id, team.map(TeamId::new).unwrap_or(current.team_id));
        prop_assert_eq!(&updated.name, &current.name);
        prop_assert_eq!(&updated.citizenship, &current.citizenship);
    }
}
