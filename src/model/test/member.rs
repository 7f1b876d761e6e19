use super::*;

/// Tests occupancy of a user connected to a voice channel.
///
/// Expected: Present
#[test]
fn voice_state_with_channel_is_present() {
    let state = create_test_voice_state(1, 10, Some(500));

    assert_eq!(Occupancy::from_voice_state(Some(&state)), Occupancy::Present);
}

/// Tests occupancy for a disconnect payload and for a missing voice state.
///
/// Discord reports a disconnect as a voice state without a channel; the cache
/// reports a user who was never in voice as no voice state at all.
///
/// Expected: Absent in both cases
#[test]
fn missing_or_empty_voice_state_is_absent() {
    let state = create_test_voice_state(1, 10, None);

    assert_eq!(Occupancy::from_voice_state(Some(&state)), Occupancy::Absent);
    assert_eq!(Occupancy::from_voice_state(None), Occupancy::Absent);
}

/// Tests building a member snapshot from a Serenity member.
///
/// Verifies that the nickname takes precedence as display name and that the held
/// roles are copied over.
///
/// Expected: Snapshot with nickname, both roles and the given occupancy
#[test]
fn builds_from_serenity_member() {
    let member = create_test_member(1, 10, "alice", Some("Ali"), &[42, 43]);

    let snapshot = GuildMember::from_member(&member, Occupancy::Present);

    assert_eq!(snapshot.user_id, UserId::new(10));
    assert_eq!(snapshot.display_name, "Ali");
    assert!(snapshot.holds(RoleId::new(42)));
    assert!(snapshot.holds(RoleId::new(43)));
    assert_eq!(snapshot.occupancy, Occupancy::Present);
}

/// Tests that the username is used when no nickname is set.
///
/// Expected: Display name equals the username
#[test]
fn falls_back_to_username() {
    let member = create_test_member(1, 10, "alice", None, &[]);

    let snapshot = GuildMember::from_member(&member, Occupancy::Absent);

    assert_eq!(snapshot.display_name, "alice");
}

/// Tests the mutation required for each occupancy/role combination.
///
/// Expected: Grant when in voice without role, Revoke when out of voice with role,
/// nothing otherwise
#[test]
fn required_action_matches_occupancy() {
    let role = RoleId::new(42);
    let in_voice = create_test_member(1, 10, "in", None, &[]);
    let left_voice = create_test_member(1, 11, "left", None, &[42]);
    let settled = create_test_member(1, 12, "settled", None, &[42]);
    let idle = create_test_member(1, 13, "idle", None, &[]);

    assert_eq!(
        GuildMember::from_member(&in_voice, Occupancy::Present).required_action(role),
        Some(RoleAction::Grant)
    );
    assert_eq!(
        GuildMember::from_member(&left_voice, Occupancy::Absent).required_action(role),
        Some(RoleAction::Revoke)
    );
    assert_eq!(
        GuildMember::from_member(&settled, Occupancy::Present).required_action(role),
        None
    );
    assert_eq!(
        GuildMember::from_member(&idle, Occupancy::Absent).required_action(role),
        None
    );
}
