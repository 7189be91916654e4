//! Error Types
//!
//! This module defines the error types used throughout the support layer.
//!
//! The layer deliberately keeps the engine's caller-validates contract:
//! out-of-range indices panic at the slice access, missing shader uniforms
//! resolve to a sentinel location, and non-finite sample times flow through
//! the curve arithmetic unchecked. The only fallible surface is parsing
//! asset-facing names into typed values.

use thiserror::Error;

/// The error type for the wisp support layer.
#[derive(Error, Debug)]
pub enum WispError {
    /// An interpolation type name that no [`CurveType`](crate::CurveType)
    /// variant matches.
    #[error("Unknown curve type: {0}")]
    UnknownCurveType(String),
}

/// Alias for `Result<T, WispError>`.
pub type Result<T> = std::result::Result<T, WispError>;
