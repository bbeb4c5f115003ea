//! Stable machine-readable error codes for the CLI surface.
//!
//! Library failures carry a [`CodedError`] inside the `anyhow` chain; the
//! binary serializes it as a JSON envelope when `--json` is requested.

use std::fmt;

use anyhow::Error;
use serde::Serialize;
use serde_json::Value;

pub const CODE_UNKNOWN_PRESET: &str = "UNKNOWN_PRESET";
pub const CODE_MALFORMED_MASK: &str = "MALFORMED_MASK";
pub const CODE_INVALID_SCALE: &str = "INVALID_SCALE";
pub const CODE_INVALID_CONFIG: &str = "INVALID_CONFIG";
pub const CODE_INVALID_SHEET: &str = "INVALID_SHEET";

#[derive(Debug, Clone)]
pub struct CodedError {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl CodedError {
    pub fn usage(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            ok: false,
            error: ErrorEnvelopeBody {
                code: self.code.to_owned(),
                message: self.message.clone(),
                details: self.details.clone(),
            },
        }
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CodedError {}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: ErrorEnvelopeBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelopeBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Walk an `anyhow` chain looking for the first coded error.
pub fn find_coded_error(error: &Error) -> Option<&CodedError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CodedError>())
}
