use crate::client::model::error::ApiError;

mod from_body;
