//! Error types
//!
//! Token serialization is total and never fails; errors only arise from
//! caller-supplied strings (host names, enum names).

use std::fmt;

/// Errors produced while building URLs or parsing option names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Proxy host could not be assembled into a valid URL
    InvalidHost { host: String, message: String },

    /// Unknown aspect mode name
    UnknownAspectMode { value: String },

    /// Unknown origin name
    UnknownOrigin { value: String },

    /// Unknown output format name
    UnknownFormat { value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHost { host, message } => {
                write!(f, "Invalid proxy host '{}': {}", host, message)
            }
            Error::UnknownAspectMode { value } => {
                write!(f, "Unknown aspect mode: {}", value)
            }
            Error::UnknownOrigin { value } => {
                write!(f, "Unknown origin: {}", value)
            }
            Error::UnknownFormat { value } => {
                write!(f, "Unknown output format: {}", value)
            }
        }
    }
}

impl std::error::Error for Error {}
