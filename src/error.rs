use thiserror::Error;

use crate::data::Dataset;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Retrieval failure for one of the three datasets.
///
/// This is the only error kind the data layer produces. It is logged where the
/// fetch completes and otherwise swallowed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{dataset} request failed: {source}")]
    Request {
        dataset: Dataset,
        #[source]
        source: reqwest::Error,
    },
    #[error("{dataset} request failed with status {status}")]
    Status {
        dataset: Dataset,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode {dataset} response: {message}")]
    Decode { dataset: Dataset, message: String },
}

impl FetchError {
    pub fn dataset(&self) -> Dataset {
        match self {
            FetchError::Request { dataset, .. }
            | FetchError::Status { dataset, .. }
            | FetchError::Decode { dataset, .. } => *dataset,
        }
    }
}
