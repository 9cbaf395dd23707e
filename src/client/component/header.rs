use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaMoon, FaSun},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{
    constant::{
        DISCORD_INVITE_URL, DOCS_URL, FEEDBACK_URL, HEADER_COLLAPSE_SCROLL_Y, MARKETPLACE_PATH,
        SITE_NAME,
    },
    flow::OwnerFlow,
    hook::{dom, use_scroll_y},
    router::Route,
    store::{SessionStore, ThemeStore},
};

/// The header is expanded near the top of the page and collapses once the
/// page has been scrolled past the threshold.
pub fn header_expanded(scroll_y: f64) -> bool {
    scroll_y <= HEADER_COLLAPSE_SCROLL_Y
}

#[component]
pub fn Header() -> Element {
    let mut theme = use_context::<Signal<ThemeStore>>();
    let mut session = use_context::<Signal<SessionStore>>();
    let mut flow = use_context::<Signal<OwnerFlow>>();
    let scroll_y = use_scroll_y();
    let nav = navigator();

    // Re-applies the stored preference on mount and after every toggle
    use_effect(move || dom::set_dark_class(theme.read().is_dark()));

    let expanded = header_expanded(scroll_y());
    let is_dark = theme.read().is_dark();
    let username = session.read().user().map(|user| user.username.clone());

    let frame_class = if expanded {
        "bg-base-100 shadow-lg border border-base-300"
    } else {
        "bg-transparent shadow-none border-none"
    };

    rsx!(div {
        class: "fixed top-4 left-1/2 -translate-x-1/2 w-full max-w-7xl z-40 rounded-lg transition-all duration-300 {frame_class}",
        div {
            class: "flex items-center justify-between gap-4 py-2 px-4",
            Link {
                to: Route::Home { code: String::new() },
                p {
                    class: "text-xl font-bold",
                    {SITE_NAME}
                }
            }
            if expanded {
                div {
                    class: "hidden lg:flex flex-1 items-center justify-end px-10 gap-6",
                    a {
                        class: "text-lg font-bold",
                        href: FEEDBACK_URL,
                        rel: "noopener noreferrer",
                        "Feedback"
                    }
                    a {
                        class: "text-lg font-bold",
                        href: DISCORD_INVITE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Discord"
                    }
                    a {
                        class: "text-lg font-bold",
                        href: DOCS_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Docs"
                    }
                    a {
                        class: "text-lg font-bold",
                        href: MARKETPLACE_PATH,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Marketplace"
                    }
                }
            }
            div {
                class: "flex items-center gap-2",
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-circle",
                    title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                    onclick: move |_| {
                        if let Err(err) = theme.write().toggle() {
                            tracing::warn!("Theme preference not saved: {}", err);
                        }
                    },
                    if is_dark {
                        Icon { width: 20, height: 20, icon: FaSun }
                    } else {
                        Icon { width: 20, height: 20, icon: FaMoon }
                    }
                }
                if let Some(username) = username {
                    p {
                        class: "hidden md:block",
                        "{username}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| {
                            tracing::info!("Logging out");
                            if let Err(err) = session.write().sign_out() {
                                tracing::warn!("Token left in storage after logout: {}", err);
                            }
                            flow.set(OwnerFlow::default());
                            nav.push(Route::Home { code: String::new() });
                        },
                        "Logout"
                    }
                }
            }
        }
    })
}
