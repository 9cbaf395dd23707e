use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Builds the error for a non-2xx response from its raw body.
    ///
    /// A JSON `{"error": ...}` body supplies the message, any other body is
    /// used as is.
    pub fn from_body(status: u64, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorDto>(body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        };
        ApiError { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Failures of the owner onboarding steps.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum FlowError {
    /// The backend answered with an error status or could not be reached.
    #[error("Request failed ({}): {}", .0.status, .0.message)]
    Api(ApiError),

    #[error("The server did not return a Discord login URL")]
    MissingLoginUrl,

    /// The OAuth callback succeeded but a required field was absent.
    #[error("Incomplete data received from Discord callback: missing `{0}`")]
    IncompleteCallback(&'static str),

    #[error("Your Discord session has expired, please log in again")]
    SessionExpired,

    #[error("Could not open the Discord login page")]
    RedirectFailed,

    #[error("Server {0} is not in your server list")]
    UnknownServer(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ApiError> for FlowError {
    fn from(err: ApiError) -> Self {
        FlowError::Api(err)
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum StorageError {
    #[error("Browser storage is unavailable")]
    Unavailable,

    #[error("Failed to write `{key}` to browser storage")]
    WriteFailed { key: &'static str },
}

/// Rejected role price input. The role keeps its previous price.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum PriceError {
    #[error("Enter a price")]
    Empty,

    #[error("`{0}` is not a valid price")]
    NotANumber(String),

    #[error("Price cannot be negative")]
    Negative,
}
