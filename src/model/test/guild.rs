use super::*;

/// Tests building guild identity from a GUILD_CREATE payload.
///
/// Verifies that the id and name of the Serenity guild are carried over.
///
/// Expected: GuildInfo with matching id and name
#[test]
fn builds_from_serenity_guild() {
    let guild = create_test_guild(123456789, "Test Guild", &[(42, "Voice")], &[(7, 500)]);

    let info = GuildInfo::from(&guild);

    assert_eq!(info.id, GuildId::new(123456789));
    assert_eq!(info.name, "Test Guild");
}
