pub mod home;
pub mod not_found;
pub mod server;

pub use home::Home;
pub use not_found::NotFound;
pub use server::{EditServer, ManageServer};
