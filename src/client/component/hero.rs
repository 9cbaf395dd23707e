use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaRightToBracket, Icon};

use crate::client::{
    hook::use_window_width,
    model::viewport::{hero_layout, HeroLayout},
};

const EVOLVE_SVG: Asset = asset!("/assets/evolve.svg");

/// Picks the hero variant for the current viewport width.
#[component]
pub fn ResponsiveHero(on_connect: EventHandler<()>) -> Element {
    let width = use_window_width();

    match hero_layout(width()) {
        None => rsx!(),
        Some(HeroLayout::Small) => rsx!(HeroSmall { on_connect }),
        Some(HeroLayout::Large) => rsx!(HeroLarge { on_connect }),
    }
}

#[component]
pub fn HeroSmall(on_connect: EventHandler<()>) -> Element {
    rsx!(
        div {
            class: "px-4 md:px-6",
            HeroBase { on_connect }
        }
    )
}

#[component]
pub fn HeroLarge(on_connect: EventHandler<()>) -> Element {
    rsx!(
        div {
            class: "px-16 py-10 text-lg",
            HeroBase { on_connect }
        }
    )
}

#[component]
pub fn HeroBase(on_connect: EventHandler<()>) -> Element {
    rsx!(
        div {
            class: "relative min-h-screen flex items-center justify-center overflow-hidden py-8",
            div {
                class: "absolute top-10 left-10 w-24 h-24 md:w-40 md:h-40 bg-purple-500 rounded-full blur-xl opacity-20 animate-pulse"
            }
            div {
                class: "absolute bottom-10 right-10 w-36 h-36 md:w-60 md:h-60 bg-pink-500 rounded-full blur-xl opacity-20 animate-pulse"
            }
            div {
                class: "relative z-10 w-full max-w-7xl flex flex-col items-center justify-center space-y-4 md:space-y-6",
                h1 {
                    class: "text-2xl sm:text-3xl lg:text-5xl tracking-tight text-center leading-tight",
                    "Unlock premium "
                    img {
                        class: "inline w-16 sm:w-20 md:w-24 lg:w-32",
                        src: EVOLVE_SVG,
                        alt: "",
                    }
                    " Discord experiences with "
                    span { class: "highlight-blue", "Blinkord" }
                    "."
                }
                div {
                    class: "text-sm sm:text-base md:text-lg lg:text-xl text-center",
                    p {
                        class: "mb-1 md:mb-2",
                        "Monetize your "
                        span { class: "highlight-green", "Discord" }
                        " server "
                        span { class: "highlight-cyan", "effortlessly" }
                        "."
                    }
                    p {
                        class: "opacity-50 text-xs sm:text-sm md:text-base",
                        "Create shareable links that grant access to exclusive discord roles with just a few clicks."
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary rounded-full flex gap-2 items-center",
                    onclick: move |_| on_connect.call(()),
                    Icon { width: 18, height: 18, icon: FaRightToBracket }
                    "Get Started"
                }
            }
        }
    )
}
