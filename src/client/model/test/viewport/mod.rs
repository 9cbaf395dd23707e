use crate::client::model::viewport::{hero_layout, Breakpoint, HeroLayout};

mod hero_layout;
