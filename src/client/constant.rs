pub const SITE_NAME: &str = "Blinkord";
pub const SITE_DESCRIPTION: &str = "Create shareable links for premium Discord channels.";

pub const LOGIN_URL_ENDPOINT: &str = "/api/discord/getLoginUrl";
pub const CALLBACK_ENDPOINT: &str = "/api/discord/callback";
pub const GUILDS_ENDPOINT: &str = "/api/discord/guilds";

pub const TOKEN_STORAGE_KEY: &str = "discordToken";
pub const THEME_STORAGE_KEY: &str = "isDark";

/// Requests still pending after this long resolve as a 408.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Widths at or below this use the compact hero band.
pub const COMPACT_MAX_WIDTH: f64 = 1200.0;
/// Widths at or below this (and above compact) use the medium hero band.
pub const MEDIUM_MAX_WIDTH: f64 = 1800.0;

/// Scroll offset past which the header collapses.
pub const HEADER_COLLAPSE_SCROLL_Y: f64 = 50.0;

pub const DEFAULT_GUILD_ICON: &str = "/default-icon.png";

pub const FEEDBACK_URL: &str = "mailto:hi@blinkord.com?subject=Blinkord Feedback";
pub const DISCORD_INVITE_URL: &str = "https://discord.gg/HugHTEPu4H";
pub const DOCS_URL: &str = "https://docs.blinkord.com";
pub const MARKETPLACE_PATH: &str = "/marketplace";
