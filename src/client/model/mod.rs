pub mod cache;
pub mod error;
pub mod form;
pub mod role;
pub mod viewport;

#[cfg(test)]
mod test;
