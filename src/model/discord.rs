use serde::{Deserialize, Serialize};

/// A Discord server the owner manages, as returned by the callback endpoint.
///
/// `roles` is absent from the callback payload and gets filled in per guild
/// once the roles endpoint has been queried.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiscordGuildDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub has_bot: bool,
    #[serde(default)]
    pub roles: Vec<DiscordRoleDto>,
}

impl DiscordGuildDto {
    /// Role names joined for display on the guild card.
    pub fn role_names(&self) -> String {
        self.roles
            .iter()
            .map(|role| role.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First character of the guild name, used when the guild has no icon.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// A premium role that can be sold through a blink.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiscordRoleDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub price: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct DiscordGuildRolesDto {
    #[serde(default)]
    pub roles: Vec<DiscordRoleDto>,
}
