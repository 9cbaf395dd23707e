use crate::client::constant::{COMPACT_MAX_WIDTH, MEDIUM_MAX_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            Breakpoint::Compact
        } else if width <= MEDIUM_MAX_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroLayout {
    Small,
    Large,
}

impl From<Breakpoint> for HeroLayout {
    fn from(breakpoint: Breakpoint) -> Self {
        match breakpoint {
            Breakpoint::Compact | Breakpoint::Medium => HeroLayout::Small,
            Breakpoint::Wide => HeroLayout::Large,
        }
    }
}

/// Picks the hero layout for the measured viewport width.
///
/// Nothing is rendered until the width is known.
pub fn hero_layout(width: Option<f64>) -> Option<HeroLayout> {
    width.map(|w| Breakpoint::from_width(w).into())
}
