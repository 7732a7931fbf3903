use std::{error::Error, fmt};

use model::vehicle::ParseVehicleClassError;

use crate::registry::RegistryError;

pub mod booking;
pub mod fleet;
pub mod registry;
pub mod service;
pub mod stats;
pub mod tariff;

#[cfg(test)]
pub(crate) mod test_support;

/// Caller-facing error for all service operations. `NotFound` and
/// `InvalidArgument` are caller mistakes and are never retried.
#[derive(Debug)]
pub enum RequestError {
    NotFound,
    InvalidArgument(String),
    Other(Box<dyn Error + Send + Sync>),
}

impl RequestError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotFound => write!(f, "the requested item does not exist"),
            RequestError::InvalidArgument(message) => {
                write!(f, "invalid argument: {}", message)
            }
            RequestError::Other(why) => write!(f, "{}", why),
        }
    }
}

impl Error for RequestError {}

impl From<RegistryError> for RequestError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::NotFound => Self::NotFound,
            RegistryError::Conflict(message) => Self::InvalidArgument(message),
            RegistryError::Other(why) => Self::Other(why),
        }
    }
}

impl From<ParseVehicleClassError> for RequestError {
    fn from(value: ParseVehicleClassError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
