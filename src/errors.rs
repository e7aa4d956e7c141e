//! # Error Types Module
//!
//! This module defines the error taxonomy shared by the adapter layer and the
//! demo binary. The pure pipeline functions never produce these for "no match"
//! or "MOQ adjusted" conditions; those are data, not failures.

use std::fmt;

/// Broad classification of an adapter or validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Requested recipe/product/order does not exist
    NotFound,
    /// Simulated network failure; safe to retry
    Transient,
    /// Malformed input (non-positive servings, zero pack size, ...)
    Validation,
    /// Business decision such as a declined payment
    BusinessRule,
}

/// Error surfaced by external collaborators or input validation
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a `NotFound` error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Shorthand for a `Transient` error
    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transient, message)
    }

    /// Shorthand for a `Validation` error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Whether the caller may retry the failed operation
    ///
    /// Only `Transient` failures are retryable; retrying a `NotFound` or a
    /// declined payment would never change the outcome.
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Transient
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::NotFound => write!(f, "Not found: {}", self.message),
            ErrorKind::Transient => write!(f, "Transient error: {}", self.message),
            ErrorKind::Validation => write!(f, "Validation error: {}", self.message),
            ErrorKind::BusinessRule => write!(f, "Business rule: {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // foreign errors have no simulated-network provenance, so they must
        // not be classified retryable and sent through the retry loop
        ApiError::validation(err.to_string())
    }
}
