//! # Error Types
//!
//! Errors raised by the leaf crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Record validation has its own structured error in `echo-schema`
//! (`ValidationError`), which lists every violated field. `EchoError` covers
//! the single-value failures that can happen below that layer, such as
//! parsing a registry literal.

use thiserror::Error;

/// Top-level error type for the ECHO crates.
#[derive(Error, Debug)]
pub enum EchoError {
    /// A string is not a member of the named enumerated domain.
    #[error("unknown {domain} value: {value:?}")]
    UnknownValue {
        /// Name of the domain that was searched.
        domain: &'static str,
        /// The rejected literal.
        value: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_value_display_names_domain_and_value() {
        let err = EchoError::UnknownValue {
            domain: "AssetType",
            value: "Spaceship".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AssetType"));
        assert!(msg.contains("\"Spaceship\""));
    }

    #[test]
    fn test_serialization_error_converts() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EchoError = bad.into();
        assert!(matches!(err, EchoError::Serialization(_)));
    }
}
