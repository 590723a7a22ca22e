//! Error types for Swagger UI mounts

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every way a request to a mount can fail
#[derive(Error, Debug)]
pub enum Error {
    #[error("Swagger UI is disabled")]
    Disabled,

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Documentation instance {0:?} is not registered")]
    DocNotRegistered(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for Swagger UI mounts
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Disabled => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::AssetNotFound(_) => StatusCode::NOT_FOUND,
            Error::DocNotRegistered(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Error::Disabled => "NOT_FOUND",
            Error::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            Error::AssetNotFound(_) => "NOT_FOUND",
            Error::DocNotRegistered(_) => "DOC_NOT_REGISTERED",
            Error::Template(_) => "TEMPLATE_ERROR",
            Error::Serialize(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // A disabled mount must look exactly like an unknown route
            Error::Disabled | Error::AssetNotFound(_) => status.into_response(),
            Error::MethodNotAllowed(_) => (status, [(header::ALLOW, "GET, HEAD")]).into_response(),
            Error::DocNotRegistered(_) => (status, self.to_string()).into_response(),
            Error::Template(_) | Error::Serialize(_) => {
                (status, "Internal server error").into_response()
            }
        }
    }
}
