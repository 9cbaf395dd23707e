pub mod session;
pub mod storage;
pub mod theme;

pub use session::{DiscordUser, Session, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use theme::ThemeStore;

#[cfg(feature = "web")]
pub use storage::LocalStorage;

#[cfg(test)]
mod test;
