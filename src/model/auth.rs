use serde::{Deserialize, Serialize};

use crate::model::discord::DiscordGuildDto;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginUrlRequestDto {
    pub owner: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginUrlDto {
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of the OAuth callback exchange.
///
/// Every field is optional on the wire so that an incomplete response can be
/// reported by name instead of failing as an opaque parse error.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiscordCallbackDto {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub guilds: Option<Vec<DiscordGuildDto>>,
    #[serde(default)]
    pub token: Option<String>,
}
