use url::form_urlencoded::byte_serialize;

use crate::client::constant::{CALLBACK_ENDPOINT, GUILDS_ENDPOINT};

/// OAuth code exchange URL with `code` as a query value.
pub fn callback_url(code: &str) -> String {
    format!("{}?code={}", CALLBACK_ENDPOINT, encode_query_value(code))
}

/// Roles URL with `guild_id` as a path segment.
pub fn guild_roles_url(guild_id: &str) -> String {
    format!("{}/{}/roles", GUILDS_ENDPOINT, encode_path_segment(guild_id))
}

fn encode_query_value(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Form encoding writes a space as `+`, which a path keeps literally.
/// A literal `+` is already escaped to `%2B`, so every remaining `+` is a space.
fn encode_path_segment(value: &str) -> String {
    encode_query_value(value).replace('+', "%20")
}
