use std::rc::Rc;

use crate::{
    client::{
        constant::TOKEN_STORAGE_KEY,
        model::error::{FlowError, StorageError},
        store::storage::KeyValueStorage,
    },
    model::{auth::DiscordCallbackDto, discord::DiscordGuildDto},
};

#[derive(Clone, Debug, PartialEq)]
pub struct DiscordUser {
    pub user_id: String,
    pub username: String,
    pub guilds: Vec<DiscordGuildDto>,
}

/// A complete, validated login returned by the OAuth callback.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: DiscordUser,
}

impl TryFrom<DiscordCallbackDto> for Session {
    type Error = FlowError;

    fn try_from(dto: DiscordCallbackDto) -> Result<Self, Self::Error> {
        let user_id = required(dto.user_id, "userId")?;
        let username = required(dto.username, "username")?;
        let guilds = dto.guilds.ok_or(FlowError::IncompleteCallback("guilds"))?;
        let token = required(dto.token, "token")?;

        Ok(Session {
            token,
            user: DiscordUser {
                user_id,
                username,
                guilds,
            },
        })
    }
}

/// Absent and empty strings both count as missing.
fn required(value: Option<String>, field: &'static str) -> Result<String, FlowError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(FlowError::IncompleteCallback(field))
}

/// Owner of the auth token and the signed-in Discord user.
///
/// The persistent storage is the source of truth for the token: writes go to
/// storage first and only reach memory once they have succeeded.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    token: Option<String>,
    user: Option<DiscordUser>,
}

impl SessionStore {
    /// Creates the store, restoring a previously persisted token.
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let token = storage.get(TOKEN_STORAGE_KEY);
        Self {
            storage,
            token,
            user: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&DiscordUser> {
        self.user.as_ref()
    }

    /// Both the token and the user profile are present.
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn sign_in(&mut self, session: Session) -> Result<(), StorageError> {
        self.storage.set(TOKEN_STORAGE_KEY, &session.token)?;
        self.token = Some(session.token);
        self.user = Some(session.user);
        Ok(())
    }

    /// Forgets the session in memory even if the stored token cannot be
    /// removed. The storage error is returned for logging.
    pub fn sign_out(&mut self) -> Result<(), StorageError> {
        self.token = None;
        self.user = None;
        self.storage.remove(TOKEN_STORAGE_KEY)
    }
}
