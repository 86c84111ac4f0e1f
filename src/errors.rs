// ============================================================================
// ERRORS - API and client-side validation failures
// ============================================================================

use thiserror::Error;

/// Default text when a failed response carries no `message`
pub const DEFAULT_API_FAILURE: &str = "API call failed";

/// Failure of a single API round trip
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected)
    #[error("{0}")]
    Network(String),
    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),
    /// Non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client-side form validation. `Display` is the alert text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required. Please fill in all information.")]
    MissingFields(Vec<&'static str>),
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error(
        "Invalid phone format!\n\n\
         ✅ Valid formats:\n  • 15551234567 (digits only)\n  • +8613812345678 (with country code)\n\n\
         ❌ Invalid formats:\n  • 555-0100 (no dashes)\n  • (555) 123-4567 (no parentheses or spaces)"
    )]
    InvalidPhone,
    #[error("{0} must be a number.")]
    InvalidNumber(&'static str),
    #[error("Please select at least one pet")]
    NoPetSelected,
}
