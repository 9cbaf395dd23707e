use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::{
    client::{
        api::DiscordApi,
        constant::TOKEN_STORAGE_KEY,
        flow::{
            fetch_guilds, request_login_url, GuildFetchOutcome, OwnerFlow, OwnerStep, ServerLookup,
        },
        model::error::{ApiError, FlowError},
        router::Route,
        store::{KeyValueStorage, MemoryStorage, SessionStore},
    },
    model::{
        auth::{DiscordCallbackDto, LoginUrlDto},
        discord::{DiscordGuildDto, DiscordGuildRolesDto, DiscordRoleDto},
    },
};

mod request_login_url;

/// In-memory backend keyed by guild id.
#[derive(Default)]
struct MockDiscordApi {
    login_url: Option<Result<LoginUrlDto, ApiError>>,
    roles: HashMap<String, Result<DiscordGuildRolesDto, ApiError>>,
    role_requests: RefCell<Vec<(String, String)>>,
    in_flight: Cell<usize>,
    max_in_flight: Cell<usize>,
}

impl MockDiscordApi {
    fn with_roles(mut self, guild_id: &str, roles: Vec<DiscordRoleDto>) -> Self {
        self.roles
            .insert(guild_id.to_string(), Ok(DiscordGuildRolesDto { roles }));
        self
    }

    fn with_error(mut self, guild_id: &str, status: u64) -> Self {
        self.roles.insert(
            guild_id.to_string(),
            Err(ApiError {
                status,
                message: format!("status {}", status),
            }),
        );
        self
    }
}

impl DiscordApi for MockDiscordApi {
    async fn get_login_url(&self) -> Result<LoginUrlDto, ApiError> {
        self.login_url.clone().unwrap_or_else(|| {
            Err(ApiError {
                status: 500,
                message: "Failed to send request: network down".to_string(),
            })
        })
    }

    async fn exchange_code(&self, _code: &str) -> Result<DiscordCallbackDto, ApiError> {
        Ok(callback())
    }

    async fn get_guild_roles(
        &self,
        guild_id: &str,
        token: &str,
    ) -> Result<DiscordGuildRolesDto, ApiError> {
        self.role_requests
            .borrow_mut()
            .push((guild_id.to_string(), token.to_string()));

        self.in_flight.set(self.in_flight.get() + 1);
        self.max_in_flight
            .set(self.max_in_flight.get().max(self.in_flight.get()));
        tokio::task::yield_now().await;
        self.in_flight.set(self.in_flight.get() - 1);

        self.roles.get(guild_id).cloned().unwrap_or_else(|| {
            Err(ApiError {
                status: 404,
                message: "Unknown guild".to_string(),
            })
        })
    }
}

fn guild(id: &str, has_bot: bool) -> DiscordGuildDto {
    DiscordGuildDto {
        id: id.to_string(),
        name: format!("Guild {}", id),
        icon: None,
        has_bot,
        roles: Vec::new(),
    }
}

fn role(id: &str) -> DiscordRoleDto {
    DiscordRoleDto {
        id: id.to_string(),
        name: format!("Role {}", id),
        enabled: false,
        price: 0.0,
    }
}

fn callback() -> DiscordCallbackDto {
    DiscordCallbackDto {
        user_id: Some("42".to_string()),
        username: Some("owner".to_string()),
        guilds: Some(vec![guild("g1", true), guild("g2", false)]),
        token: Some("jwt-token".to_string()),
    }
}

fn session_store() -> (Rc<MemoryStorage>, SessionStore) {
    let storage = Rc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());
    (storage, store)
}

/// Flow that has completed the callback and loaded the given guilds.
fn connected_flow(guilds: Vec<DiscordGuildDto>) -> (OwnerFlow, SessionStore) {
    let (_, mut store) = session_store();
    let mut flow = OwnerFlow::default();
    flow.handle_login();
    flow.complete_callback(&mut store, Ok(callback())).unwrap();
    flow.begin_guild_fetch();
    flow.apply_guild_fetch(
        &mut store,
        "jwt-token",
        GuildFetchOutcome::Loaded {
            guilds,
            failed: Vec::new(),
        },
    );
    (flow, store)
}
