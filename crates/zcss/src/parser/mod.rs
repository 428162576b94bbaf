//! Value parsers for theme configuration and grid templates.
//!
//! - [`parse_length_value`]: a single CSS length (`8px`, `1.5rem`, `0`, `auto`)
//! - [`parse_grid_template`]: a track list (`1fr 2fr`, `repeat(3, 1fr)`)
//!
//! Both require the whole input to be consumed.
//!
//! ## Example
//!
//! ```rust
//! use zcss::parser::parse_grid_template;
//!
//! let template = parse_grid_template("repeat(2, 1fr) 200px").unwrap();
//! assert_eq!(template.column_count(), 3);
//! assert_eq!(template.to_string(), "repeat(2, 1fr) 200px");
//! ```

pub mod units;

pub use crate::parser::units::{parse_length, parse_min_width_query, parse_track_list};

use crate::error::{Result, ZcssError};
use crate::types::{GridTemplate, Length};

/// Parses a complete CSS length.
pub fn parse_length_value(source: &str) -> Result<Length> {
    let (remaining, length) =
        parse_length(source).map_err(|e| ZcssError::InvalidValue(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(ZcssError::InvalidValue(format!(
            "Unexpected tokens after length: {}",
            remaining.trim()
        )));
    }

    Ok(length)
}

/// Threshold of a complete `@media (min-width: …)` guard, in its own unit.
pub fn media_min_width(key: &str) -> Option<f64> {
    match parse_min_width_query(key) {
        Ok((remaining, width)) if remaining.trim().is_empty() => Some(width.value),
        _ => None,
    }
}

/// Parses a complete grid track list.
pub fn parse_grid_template(source: &str) -> Result<GridTemplate> {
    let (remaining, tracks) =
        parse_track_list(source).map_err(|e| ZcssError::InvalidValue(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(ZcssError::InvalidValue(format!(
            "Unexpected tokens in grid template: {}",
            remaining.trim()
        )));
    }

    Ok(GridTemplate { tracks })
}
