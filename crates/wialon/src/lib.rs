use std::error;
use std::fmt;
use std::sync::Arc;

use phf::phf_map;

pub mod client;
pub mod model;

/// Vendor error codes the remote API answers with, as documented for the
/// session/query protocol. Unlisted codes are reported numerically.
pub static ERROR_TABLE: phf::Map<i32, &'static str> = phf_map! {
    1i32 => "invalid session",
    2i32 => "invalid service name",
    3i32 => "invalid result",
    4i32 => "invalid input",
    5i32 => "error performing request",
    6i32 => "unknown error",
    7i32 => "access denied",
    8i32 => "invalid user name or password",
    9i32 => "authorization server is unavailable",
    1001i32 => "no messages for selected interval",
    1002i32 => "item with such unique property already exists",
    1003i32 => "only one request is allowed at the moment",
};

pub const INVALID_SESSION: i32 = 1;

#[derive(Debug, Clone)]
pub enum ApiError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    /// A numeric error answer from the vendor API.
    Api {
        code: i32,
    },
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            ApiError::JsonError(e) => write!(f, "JSON parse error: {}", e),
            ApiError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, text, url)
                }
                None => write!(f, "Invalid Response ({}) {}", status_code, url),
            },
            ApiError::Api { code } => match ERROR_TABLE.get(code) {
                Some(message) => write!(f, "API error {}: {}", code, message),
                None => write!(f, "API error {}", code),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::JsonError(Arc::new(e))
    }
}
