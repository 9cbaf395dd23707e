use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::client::{constant::REQUEST_TIMEOUT_MS, model::error::ApiError};

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        // The body can only be read once
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_body(status, &body))
    }
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url).header("Content-Type", "application/json")
}

/// Create a GET request carrying the session token as a bearer credential
pub fn get_authorized(url: &str, token: &str) -> Request {
    Request::get(url).header("Authorization", &format!("Bearer {}", token))
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Send a request and handle common errors
///
/// The request is abandoned with a 408 if it has not completed within
/// `REQUEST_TIMEOUT_MS`.
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));

    match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to send request: {}", e),
        }),
        Either::Right(_) => Err(ApiError {
            status: 408,
            message: format!("Request timed out after {}ms", REQUEST_TIMEOUT_MS),
        }),
    }
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
