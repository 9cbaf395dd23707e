use super::*;

/// Tests the code exchange URL.
///
/// Verifies reserved characters in the code are escaped as query data.
///
/// Expected: `&`, `=` and space encoded, `+` for the space
#[test]
fn callback_url_encodes_code() {
    assert_eq!(callback_url("abc123"), "/api/discord/callback?code=abc123");
    assert_eq!(callback_url("a&b=c d"), "/api/discord/callback?code=a%26b%3Dc+d");
}

/// Tests the guild roles URL.
///
/// Verifies the guild id is escaped as a path segment rather than as a
/// query value.
///
/// Expected: space as `%20`, `/` and `+` escaped, plain ids unchanged
#[test]
fn guild_roles_url_encodes_path_segment() {
    assert_eq!(guild_roles_url("123456789"), "/api/discord/guilds/123456789/roles");
    assert_eq!(guild_roles_url("a b/c+d"), "/api/discord/guilds/a%20b%2Fc%2Bd/roles");
}
