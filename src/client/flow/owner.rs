//! Owner onboarding state machine.
//!
//! `OwnerFlow` holds everything the onboarding page renders from and exposes
//! one method per transition. The async steps that talk to the backend are
//! free functions generic over [`DiscordApi`]; the page component awaits them
//! and feeds the result back into the matching transition.

use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    client::{
        api::DiscordApi,
        model::{
            cache::Cache,
            error::{ApiError, FlowError},
        },
        router::Route,
        store::{Session, SessionStore},
    },
    model::{auth::DiscordCallbackDto, discord::DiscordGuildDto},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerStep {
    /// Landing page, nothing started yet.
    Welcome,
    /// Waiting for the owner to connect their Discord account.
    ConnectDiscord,
    /// Discord connected, choosing which server to set up.
    SelectServer,
    /// A server was chosen and navigation is pending.
    Redirecting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerSelection {
    pub server_id: String,
    pub has_bot: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerFlow {
    started: bool,
    connecting: bool,
    discord_connected: bool,
    guilds: Cache<Vec<DiscordGuildDto>>,
    failed_guilds: Vec<String>,
    selected: Option<ServerSelection>,
    error: Option<FlowError>,
}

/// Result of loading roles for every guild of the session.
#[derive(Clone, Debug, PartialEq)]
pub enum GuildFetchOutcome {
    /// One entry per input guild, in input order. Guilds whose roles could
    /// not be loaded are listed in `failed` and carry no roles.
    Loaded {
        guilds: Vec<DiscordGuildDto>,
        failed: Vec<String>,
    },
    /// The backend rejected the session token.
    Unauthorized,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ServerLookup {
    /// Roles are still being fetched.
    Loading,
    Found(DiscordGuildDto),
    Unknown,
}

impl OwnerFlow {
    pub fn step(&self) -> OwnerStep {
        if !self.started {
            OwnerStep::Welcome
        } else if !self.discord_connected {
            OwnerStep::ConnectDiscord
        } else if self.selected.is_none() {
            OwnerStep::SelectServer
        } else {
            OwnerStep::Redirecting
        }
    }

    pub fn discord_connected(&self) -> bool {
        self.discord_connected
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn guilds(&self) -> &Cache<Vec<DiscordGuildDto>> {
        &self.guilds
    }

    pub fn guild(&self, server_id: &str) -> Option<&DiscordGuildDto> {
        self.guilds
            .data()
            .and_then(|guilds| guilds.iter().find(|guild| guild.id == server_id))
    }

    pub fn failed_guilds(&self) -> &[String] {
        &self.failed_guilds
    }

    pub fn selected(&self) -> Option<&ServerSelection> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&FlowError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Leaves the landing page for the Discord connect prompt.
    pub fn handle_login(&mut self) {
        self.started = true;
    }

    pub fn begin_connect(&mut self) {
        self.connecting = true;
        self.error = None;
    }

    /// Records a failed login URL request. The owner can press the button again.
    pub fn connect_failed(&mut self, err: FlowError) {
        tracing::error!("Failed to connect Discord: {}", err);
        self.connecting = false;
        self.error = Some(err);
    }

    /// Applies the answer of the OAuth code exchange.
    ///
    /// A valid answer is written to `session` and marks Discord as connected.
    /// Anything else leaves both the session and the connection flag alone.
    pub fn complete_callback(
        &mut self,
        session: &mut SessionStore,
        response: Result<DiscordCallbackDto, ApiError>,
    ) -> Result<(), FlowError> {
        let result = response
            .map_err(FlowError::from)
            .and_then(Session::try_from)
            .and_then(|new_session| session.sign_in(new_session).map_err(FlowError::from));

        match result {
            Ok(()) => {
                if let Some(user) = session.user() {
                    tracing::info!(
                        "Discord connected as {} with {} server(s)",
                        user.username,
                        user.guilds.len()
                    );
                }
                self.started = true;
                self.connecting = false;
                self.discord_connected = true;
                self.guilds = Cache::NotFetched;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to handle Discord callback: {}", err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn begin_guild_fetch(&mut self) {
        self.guilds = Cache::Loading;
    }

    /// Stores fetched guilds, or drops the session when the token was refused.
    ///
    /// `token` is the token the fetch was started with. Outcomes that arrive
    /// after a logout or for an older session are discarded.
    pub fn apply_guild_fetch(
        &mut self,
        session: &mut SessionStore,
        token: &str,
        outcome: GuildFetchOutcome,
    ) {
        let current = session.token() == Some(token);
        if !self.discord_connected || !self.guilds.is_loading() || !current {
            tracing::debug!("Discarding role fetch result for a previous session");
            return;
        }

        match outcome {
            GuildFetchOutcome::Loaded { guilds, failed } => {
                if !failed.is_empty() {
                    tracing::warn!("Roles unavailable for server(s): {}", failed.join(", "));
                }
                self.guilds = Cache::Fetched(guilds);
                self.failed_guilds = failed;
            }
            GuildFetchOutcome::Unauthorized => {
                tracing::warn!("Token expired, prompting user to re-login");
                if let Err(err) = session.sign_out() {
                    tracing::warn!("Expired token left in storage: {}", err);
                }
                *self = OwnerFlow {
                    error: Some(FlowError::SessionExpired),
                    ..OwnerFlow::default()
                };
            }
        }
    }

    /// Resolves a server id for the edit and manage pages.
    pub fn lookup_server(&self, server_id: &str) -> ServerLookup {
        if self.guilds.is_loading() {
            return ServerLookup::Loading;
        }
        self.guild(server_id)
            .cloned()
            .map_or(ServerLookup::Unknown, ServerLookup::Found)
    }

    /// Selects one of the fetched guilds.
    ///
    /// Ids that are not in the fetched list are rejected so the redirect is
    /// always decided from a known `has_bot` flag.
    pub fn handle_server_select(&mut self, server_id: &str) -> Result<(), FlowError> {
        let Some(guild) = self.guild(server_id) else {
            let err = FlowError::UnknownServer(server_id.to_string());
            tracing::error!("{}", err);
            self.error = Some(err.clone());
            return Err(err);
        };

        tracing::info!(
            "Server {} selected, bot installed: {}",
            guild.id,
            guild.has_bot
        );
        self.selected = Some(ServerSelection {
            server_id: guild.id.clone(),
            has_bot: guild.has_bot,
        });
        Ok(())
    }

    /// Where to navigate once a server is selected.
    pub fn redirect_route(&self) -> Option<Route> {
        self.selected.as_ref().map(|selection| {
            let server_id = selection.server_id.clone();
            if selection.has_bot {
                Route::ManageServer { server_id }
            } else {
                Route::EditServer { server_id }
            }
        })
    }

    /// Clears the selection so returning to the flow shows the server list.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Requests the Discord consent URL for an owner login.
pub async fn request_login_url<A: DiscordApi>(api: &A) -> Result<String, FlowError> {
    let response = api.get_login_url().await?;
    response
        .url
        .filter(|url| !url.is_empty())
        .ok_or(FlowError::MissingLoginUrl)
}

/// Loads the roles of every guild concurrently.
///
/// A 401 on any request makes the whole batch [`GuildFetchOutcome::Unauthorized`].
/// Any other failure only empties that guild's roles.
pub async fn fetch_guilds<A: DiscordApi>(
    api: &A,
    guilds: &[DiscordGuildDto],
    token: &str,
) -> GuildFetchOutcome {
    let responses = join_all(
        guilds
            .iter()
            .map(|guild| api.get_guild_roles(&guild.id, token)),
    )
    .await;

    let mut loaded = Vec::with_capacity(guilds.len());
    let mut failed = Vec::new();
    let mut unauthorized = false;

    for (guild, response) in guilds.iter().zip(responses) {
        match response {
            Ok(roles) => loaded.push(DiscordGuildDto {
                roles: roles.roles,
                ..guild.clone()
            }),
            Err(err) if err.is_unauthorized() => unauthorized = true,
            Err(err) => {
                tracing::error!("Failed to fetch roles for guild {}: {}", guild.id, err);
                failed.push(guild.id.clone());
                loaded.push(DiscordGuildDto {
                    roles: Vec::new(),
                    ..guild.clone()
                });
            }
        }
    }

    if unauthorized {
        GuildFetchOutcome::Unauthorized
    } else {
        GuildFetchOutcome::Loaded {
            guilds: loaded,
            failed,
        }
    }
}
