pub mod guild_card;
pub mod header;
pub mod hero;
pub mod layout;
pub mod page;
pub mod server_form;

pub use guild_card::GuildCard;
pub use header::Header;
pub use hero::ResponsiveHero;
pub use layout::Layout;
pub use page::Page;
pub use server_form::ServerForm;
