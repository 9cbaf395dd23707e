use dioxus::prelude::*;

use crate::{client::constant::DEFAULT_GUILD_ICON, model::discord::DiscordGuildDto};

#[component]
pub fn GuildCard(guild: DiscordGuildDto, on_select: EventHandler<String>) -> Element {
    let icon = guild
        .icon
        .clone()
        .unwrap_or_else(|| DEFAULT_GUILD_ICON.to_string());
    let role_names = guild.role_names();
    let guild_id = guild.id.clone();

    rsx!(
        div {
            class: "card overflow-hidden bg-base-200",
            div {
                class: "aspect-video relative",
                div {
                    class: "absolute inset-0 bg-cover bg-center opacity-30",
                    style: "background-image: url({icon})",
                    aria_hidden: "true",
                }
                div {
                    class: "absolute inset-0 flex items-center justify-center",
                    if guild.icon.is_some() {
                        img {
                            src: "{icon}",
                            alt: "{guild.name} icon",
                            class: "w-16 h-16 rounded-full border-4 border-white",
                        }
                    } else {
                        div {
                            class: "w-16 h-16 rounded-full border-4 border-white bg-neutral flex items-center justify-center font-bold",
                            "{guild.initial()}"
                        }
                    }
                }
            }
            div {
                class: "p-4 flex items-center justify-between gap-2",
                div {
                    h3 {
                        class: "font-semibold text-lg",
                        "{guild.name}"
                    }
                    p {
                        class: "text-sm opacity-60",
                        if role_names.is_empty() {
                            "No roles"
                        } else {
                            "Roles: {role_names}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| on_select.call(guild_id.clone()),
                    if guild.has_bot { "Go" } else { "Setup" }
                }
            }
        }
    )
}
