pub mod endpoint;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod discord;

#[cfg(feature = "web")]
pub use discord::HttpDiscordApi;

use crate::{
    client::model::error::ApiError,
    model::{
        auth::{DiscordCallbackDto, LoginUrlDto},
        discord::DiscordGuildRolesDto,
    },
};

/// Backend endpoints the owner onboarding flow talks to.
///
/// The browser implementation is [`HttpDiscordApi`]; tests drive the flow
/// through an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait DiscordApi {
    /// Ask the backend for the Discord consent URL for an owner login.
    async fn get_login_url(&self) -> Result<LoginUrlDto, ApiError>;

    /// Exchange an OAuth `code` for a session token and the user's guilds.
    async fn exchange_code(&self, code: &str) -> Result<DiscordCallbackDto, ApiError>;

    /// Fetch the roles of one guild on behalf of the session holding `token`.
    async fn get_guild_roles(
        &self,
        guild_id: &str,
        token: &str,
    ) -> Result<DiscordGuildRolesDto, ApiError>;
}

#[cfg(test)]
mod test;
