pub mod owner;

pub use owner::{
    fetch_guilds, request_login_url, GuildFetchOutcome, OwnerFlow, OwnerStep, ServerLookup,
};

#[cfg(test)]
mod test;
