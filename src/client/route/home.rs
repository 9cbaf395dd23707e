use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};
use dioxus_logger::tracing;

use crate::client::{
    component::{GuildCard, Page, ResponsiveHero},
    constant::{SITE_DESCRIPTION, SITE_NAME},
    flow::{OwnerFlow, OwnerStep},
    router::Route,
    store::SessionStore,
};

#[cfg(feature = "web")]
use crate::client::{
    api::{DiscordApi, HttpDiscordApi},
    flow::{fetch_guilds, request_login_url},
    hook::dom,
};

/// Owner onboarding: landing, Discord connect, OAuth callback, server choice.
#[component]
pub fn Home(code: String) -> Element {
    let mut flow = use_context::<Signal<OwnerFlow>>();
    let session = use_context::<Signal<SessionStore>>();
    let nav = navigator();

    // Exchange the OAuth code Discord sent us back with
    #[cfg(feature = "web")]
    {
        let mut session = session;
        use_effect(use_reactive!(|code| {
            if code.is_empty() {
                return;
            }
            tracing::info!("OAuth code received");
            spawn(async move {
                let response = HttpDiscordApi.exchange_code(&code).await;
                let _ = flow
                    .write()
                    .complete_callback(&mut session.write(), response);
                // Drop the single-use code from the address bar
                nav.replace(Route::Home {
                    code: String::new(),
                });
            });
        }));
    }

    // Load roles for every guild once Discord is connected
    let discord_connected = flow.read().discord_connected();
    #[cfg(feature = "web")]
    {
        let mut session = session;
        use_effect(use_reactive!(|discord_connected| {
            if !discord_connected || flow.peek().guilds().is_fetched() {
                return;
            }
            let (guilds, token) = {
                let store = session.peek();
                match (store.user(), store.token()) {
                    (Some(user), Some(token)) => (user.guilds.clone(), token.to_string()),
                    _ => return,
                }
            };
            tracing::info!("Discord connected, fetching roles for {} server(s)", guilds.len());
            flow.write().begin_guild_fetch();
            spawn(async move {
                let outcome = fetch_guilds(&HttpDiscordApi, &guilds, &token).await;
                flow.write()
                    .apply_guild_fetch(&mut session.write(), &token, outcome);
            });
        }));
    }
    #[cfg(not(feature = "web"))]
    let _ = (discord_connected, session);

    // Navigate as soon as a server is chosen
    let redirect = flow.read().redirect_route();
    use_effect(use_reactive!(|redirect| {
        if let Some(route) = redirect {
            tracing::info!("Redirecting to {}", route);
            nav.push(route);
            flow.write().clear_selection();
        }
    }));

    let handle_login = move |_: ()| flow.write().handle_login();

    let handle_connect_discord = move |_: ()| {
        flow.write().begin_connect();
        #[cfg(feature = "web")]
        spawn(async move {
            match request_login_url(&HttpDiscordApi).await {
                Ok(url) => {
                    tracing::info!("Redirecting to Discord login");
                    if let Err(err) = dom::redirect(&url) {
                        flow.write().connect_failed(err);
                    }
                }
                Err(err) => flow.write().connect_failed(err),
            }
        });
    };

    let handle_server_select = move |server_id: String| {
        let _ = flow.write().handle_server_select(&server_id);
    };

    let step = flow.read().step();
    let error = flow.read().error().map(|err| err.to_string());

    rsx! {
        Title { "{SITE_NAME}" }
        if step == OwnerStep::Welcome {
            if let Some(error) = error {
                div {
                    class: "pt-28 px-4",
                    FlowAlert { message: error, on_dismiss: move |_| flow.write().dismiss_error() }
                }
            }
            ResponsiveHero { on_connect: handle_login }
        } else {
            Page {
                class: "flex flex-col",
                main {
                    class: "flex-grow container mx-auto px-4 py-8",
                    if let Some(error) = error {
                        FlowAlert { message: error, on_dismiss: move |_| flow.write().dismiss_error() }
                    }
                    if step == OwnerStep::ConnectDiscord {
                        ConnectDiscord {
                            connecting: flow.read().is_connecting(),
                            on_connect: handle_connect_discord,
                        }
                    } else if step == OwnerStep::SelectServer {
                        SelectServer { on_select: handle_server_select }
                    } else if let Some(selection) = flow.read().selected() {
                        p { "Redirecting to server {selection.server_id}..." }
                    } else {
                        p { "Redirecting..." }
                    }
                }
            }
        }
    }
}

#[component]
fn FlowAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "alert alert-error mb-6 flex justify-between",
            span { "{message}" }
            button {
                r#type: "button",
                class: "btn btn-sm btn-ghost",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    )
}

#[component]
fn ConnectDiscord(connecting: bool, on_connect: EventHandler<()>) -> Element {
    rsx!(
        div {
            class: "text-center",
            h2 { class: "text-2xl font-bold mb-4", "Connect Discord" }
            p { class: "mb-2", {SITE_DESCRIPTION} }
            p { class: "mb-4", "To continue, you need to connect your Discord account." }
            button {
                r#type: "button",
                class: "btn glow-on-hover w-full flex items-center justify-center gap-2",
                disabled: connecting,
                onclick: move |_| on_connect.call(()),
                if connecting {
                    span { class: "loading loading-spinner loading-sm" }
                } else {
                    Icon { width: 16, height: 16, icon: FaDiscord }
                }
                "Connect Discord"
            }
        }
    )
}

#[component]
fn SelectServer(on_select: EventHandler<String>) -> Element {
    let flow = use_context::<Signal<OwnerFlow>>();
    let flow = flow.read();
    let failed = flow.failed_guilds().join(", ");

    rsx!(
        div {
            h2 { class: "text-3xl font-bold mb-8", "Select a server" }
            if !failed.is_empty() {
                div {
                    role: "alert",
                    class: "alert alert-warning mb-6",
                    "Roles could not be loaded for: {failed}"
                }
            }
            if let Some(guilds) = flow.guilds().data() {
                if guilds.is_empty() {
                    p { "No servers available." }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for guild in guilds.iter().cloned() {
                            GuildCard {
                                key: "{guild.id}",
                                guild: guild.clone(),
                                on_select: move |id| on_select.call(id),
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "flex items-center gap-2",
                    span { class: "loading loading-spinner" }
                    "Loading your servers..."
                }
            }
        }
    )
}
