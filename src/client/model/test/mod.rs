mod error;
mod form;
mod role;
mod viewport;
