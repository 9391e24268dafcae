//! Error types for keypad-calc

use thiserror::Error;

/// Input mapping errors
///
/// The engine itself never fails; these are raised only when raw button
/// text cannot be turned into a digit, operator or keypad action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}

impl KeypadError {
    pub fn invalid_digit(token: impl Into<String>) -> Self {
        Self::InvalidDigit(token.into())
    }

    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::UnknownOperator(token.into())
    }

    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey(token.into())
    }
}

pub type Result<T> = std::result::Result<T, KeypadError>;
