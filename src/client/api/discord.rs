use crate::{
    client::{api::DiscordApi, constant::LOGIN_URL_ENDPOINT, model::error::ApiError},
    model::{
        auth::{DiscordCallbackDto, LoginUrlDto, LoginUrlRequestDto},
        discord::DiscordGuildRolesDto,
    },
};

use super::endpoint::{callback_url, guild_roles_url};
use super::helper::{get, get_authorized, parse_response, post, send_request, serialize_json};

/// [`DiscordApi`] backed by same-origin `fetch` calls.
#[derive(Clone, Copy, Default)]
pub struct HttpDiscordApi;

impl DiscordApi for HttpDiscordApi {
    async fn get_login_url(&self) -> Result<LoginUrlDto, ApiError> {
        let body = serialize_json(&LoginUrlRequestDto { owner: true })?;
        let response = send_request(post(LOGIN_URL_ENDPOINT).body(body)).await?;
        parse_response(response).await
    }

    async fn exchange_code(&self, code: &str) -> Result<DiscordCallbackDto, ApiError> {
        let response = send_request(get(&callback_url(code))).await?;
        parse_response(response).await
    }

    async fn get_guild_roles(
        &self,
        guild_id: &str,
        token: &str,
    ) -> Result<DiscordGuildRolesDto, ApiError> {
        let response = send_request(get_authorized(&guild_roles_url(guild_id), token)).await?;
        parse_response(response).await
    }
}
