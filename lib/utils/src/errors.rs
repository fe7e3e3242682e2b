use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const NOT_AUTHENTICATED_MESSAGE: &str = "Please authenticate yourself.";
const MALFORMED_TREE_MESSAGE: &str = "Sorry, we could not read these comments.";
const BAD_REQUEST_MESSAGE: &str = "Sorry, we didn't understand the server's response.";
const UNAVAILABLE_MESSAGE: &str = "Sorry, we've got noise on the line.";
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong.";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    NotAuthenticated,
    MalformedCommentTree(String),
    DeserializationError(String),
    PersistenceError(String),
    InternalError(String),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotAuthenticated => String::from(NOT_AUTHENTICATED_MESSAGE),
            AppError::MalformedCommentTree(_) => String::from(MALFORMED_TREE_MESSAGE),
            AppError::DeserializationError(_) => String::from(BAD_REQUEST_MESSAGE),
            AppError::PersistenceError(_) => String::from(UNAVAILABLE_MESSAGE),
            AppError::InternalError(_) => String::from(INTERNAL_ERROR_MESSAGE),
        }
    }

    pub fn error_detail(&self) -> String {
        match self {
            AppError::NotAuthenticated => String::from(NOT_AUTHENTICATED_MESSAGE),
            AppError::MalformedCommentTree(e) => e.clone(),
            AppError::DeserializationError(e) => e.clone(),
            AppError::PersistenceError(e) => e.clone(),
            AppError::InternalError(e) => e.clone(),
        }
    }

    /// Constructs a new [`AppError::InternalError`] from some other type.
    pub fn new(msg: impl ToString) -> Self {
        Self::InternalError(msg.to_string())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

impl FromStr for AppError {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        log::debug!("Failed to decode json at line {}, column {}: {error}", error.line(), error.column());
        AppError::DeserializationError(error.to_string())
    }
}
