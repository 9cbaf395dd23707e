use std::rc::Rc;

use crate::{
    client::{
        constant::{THEME_STORAGE_KEY, TOKEN_STORAGE_KEY},
        model::error::{FlowError, StorageError},
        store::{KeyValueStorage, MemoryStorage, Session, SessionStore, ThemeStore},
    },
    model::{auth::DiscordCallbackDto, discord::DiscordGuildDto},
};


fn guild(id: &str) -> DiscordGuildDto {
    DiscordGuildDto {
        id: id.to_string(),
        name: format!("Guild {}", id),
        icon: None,
        has_bot: false,
        roles: Vec::new(),
    }
}

fn complete_callback() -> DiscordCallbackDto {
    DiscordCallbackDto {
        user_id: Some("42".to_string()),
        username: Some("owner".to_string()),
        guilds: Some(vec![guild("g1")]),
        token: Some("jwt-token".to_string()),
    }
}
