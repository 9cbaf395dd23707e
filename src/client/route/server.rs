use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page, ServerForm,
        },
        constant::SITE_NAME,
        flow::{OwnerFlow, ServerLookup},
        model::form::{validate_blink_form, FormErrors},
        router::Route,
    },
    model::{
        blink::{BlinkDraftDto, BlinkFormDto},
        discord::DiscordGuildDto,
    },
};

const UNKNOWN_SERVER_MESSAGE: &str =
    "This server is not loaded. Connect Discord again to pick it from your list.";

/// Blink setup for a server the bot has not joined yet.
#[component]
pub fn EditServer(server_id: String) -> Element {
    let flow = use_context::<Signal<OwnerFlow>>();

    let lookup = flow.read().lookup_server(&server_id);
    match lookup {
        ServerLookup::Loading => rsx!(LoadingPage {}),
        ServerLookup::Unknown => rsx! {
            Title { "Server not found | {SITE_NAME}" }
            ErrorPage { status: 404, message: UNKNOWN_SERVER_MESSAGE }
        },
        ServerLookup::Found(guild) => rsx!(BlinkEditor {
            key: "{guild.id}",
            guild: guild.clone(),
        }),
    }
}

#[component]
fn BlinkEditor(guild: DiscordGuildDto) -> Element {
    let form_data = use_context::<Signal<BlinkFormDto>>();

    let discord_roles = use_signal(|| guild.roles.clone());
    let mut form_errors = use_signal(FormErrors::default);
    let mut saved = use_signal(|| false);

    let draft_server_id = guild.id.clone();
    let on_submit = move |_: ()| {
        let errors = validate_blink_form(&form_data.read());
        if errors.is_empty() {
            let draft = BlinkDraftDto {
                server_id: draft_server_id.clone(),
                form: form_data(),
                roles: discord_roles()
                    .into_iter()
                    .filter(|role| role.enabled)
                    .collect(),
            };
            tracing::info!(
                "Blink draft for server {} ready with {} premium role(s)",
                draft.server_id,
                draft.roles.len()
            );
            match serde_json::to_string(&draft) {
                Ok(json) => tracing::debug!("Blink draft: {}", json),
                Err(err) => tracing::warn!("Failed to serialize blink draft: {}", err),
            }
            saved.set(true);
        } else {
            tracing::warn!("Blink form for server {} has errors", draft_server_id);
            saved.set(false);
        }
        form_errors.set(errors);
    };

    rsx! {
        Title { "Set up {guild.name} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-2xl",
                GuildHeading { guild: guild.clone() }
                if saved() {
                    div {
                        role: "alert",
                        class: "alert alert-success mb-6",
                        "Blink saved."
                    }
                }
                ServerForm {
                    discord_roles,
                    form_errors: form_errors(),
                    on_submit,
                }
            }
        }
    }
}

/// Overview of a server that already has the bot installed.
#[component]
pub fn ManageServer(server_id: String) -> Element {
    let flow = use_context::<Signal<OwnerFlow>>();

    let lookup = flow.read().lookup_server(&server_id);
    let guild = match lookup {
        ServerLookup::Found(guild) => guild,
        ServerLookup::Loading => return rsx!(LoadingPage {}),
        ServerLookup::Unknown => {
            return rsx! {
                Title { "Server not found | {SITE_NAME}" }
                ErrorPage { status: 404, message: UNKNOWN_SERVER_MESSAGE }
            }
        }
    };

    rsx! {
        Title { "Manage {guild.name} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-4xl",
                div {
                    class: "flex items-center justify-between gap-4",
                    GuildHeading { guild: guild.clone() }
                    Link {
                        to: Route::EditServer { server_id: server_id.clone() },
                        class: "btn btn-primary",
                        "Edit blink"
                    }
                }
                if guild.roles.is_empty() {
                    p { class: "opacity-60", "No roles found for this server." }
                } else {
                    table {
                        class: "table w-full",
                        thead {
                            tr {
                                th { "Role" }
                                th { "Price" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for role in guild.roles.iter() {
                                tr {
                                    key: "{role.id}",
                                    td { "{role.name}" }
                                    td { {format!("{:.2}", role.price)} }
                                    td {
                                        if role.enabled {
                                            span { class: "badge badge-success", "Enabled" }
                                        } else {
                                            span { class: "badge badge-ghost", "Disabled" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GuildHeading(guild: DiscordGuildDto) -> Element {
    rsx!(
        div {
            class: "flex items-center gap-3 mb-6",
            if let Some(icon) = &guild.icon {
                img {
                    src: "{icon}",
                    alt: "{guild.name} icon",
                    class: "w-12 h-12 rounded-full",
                }
            } else {
                div {
                    class: "w-12 h-12 rounded-full bg-neutral flex items-center justify-center font-bold",
                    "{guild.initial()}"
                }
            }
            div {
                h1 { class: "text-2xl font-bold", "{guild.name}" }
                p {
                    class: "text-sm opacity-60",
                    if guild.has_bot { "Bot installed" } else { "Bot not installed yet" }
                }
            }
        }
    )
}
