//! # Error Module
//!
//! Error types for signature generation.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - dimensions, what went wrong
//!
//! Comparison never fails: degenerate inputs (empty signatures, mismatched
//! lengths, all-zero vectors) have explicitly defined results instead of
//! error paths.

use thiserror::Error;

/// Errors that occur during signature generation
#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("The backing pixel buffer for the {width}x{height} image is not contiguous")]
    NonContiguousBuffer { width: u32, height: u32 },

    #[error("Invalid generator configuration: {0}")]
    Config(String),
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, SignatureError>;
