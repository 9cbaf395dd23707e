use serde::{Deserialize, Serialize};

use crate::model::discord::DiscordRoleDto;

/// Draft content of a blink, edited field by field in the server form.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlinkFormDto {
    pub title: String,
    pub description: String,
    pub icon_url: String,
}

/// What gets handed over once the form passes validation.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlinkDraftDto {
    pub server_id: String,
    #[serde(flatten)]
    pub form: BlinkFormDto,
    pub roles: Vec<DiscordRoleDto>,
}
