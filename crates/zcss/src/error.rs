//! Error types for the responsive style engine.
//!
//! The emitters themselves never fail: absent input means "no styling
//! requested" and yields empty output. Errors only come from lookups by
//! name and from the value parsers used by the theme configuration.

use thiserror::Error;

use crate::types::Breakpoint;

/// Errors produced by breakpoint lookups, token lookups and value parsing.
///
/// # Examples
///
/// ```rust
/// use zcss::{Breakpoint, ZcssError};
///
/// let err = "xl".parse::<Breakpoint>().unwrap_err();
/// assert!(matches!(err, ZcssError::UnknownBreakpoint(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZcssError {
    /// A breakpoint name outside `base, xs, sm, md, lg`.
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// `base` has no minimum-width threshold.
    #[error("Breakpoint {0} has no min-width threshold")]
    MissingThreshold(Breakpoint),

    /// Per-breakpoint input that names no breakpoint at all.
    #[error("Responsive value defines no breakpoints")]
    EmptyResponsive,

    /// A design token name that the token kind does not define.
    #[error("Unknown {kind} token: {name}")]
    UnknownToken { kind: &'static str, name: String },

    /// A CSS value that the length or grid-template parser rejected.
    #[error("Invalid CSS value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ZcssError>;
