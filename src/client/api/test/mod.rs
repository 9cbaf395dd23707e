use crate::client::api::endpoint::{callback_url, guild_roles_url};

mod endpoint;
