//! Grid template types for the `grid-template-columns` prop.
//!
//! ## Syntax
//!
//! ```css
//! grid-template-columns: 1fr 2fr;
//! grid-template-columns: repeat(3, 1fr);
//! grid-template-columns: 200px auto;
//! ```

use std::fmt;
use std::str::FromStr;

use super::Length;
use crate::error::ZcssError;

/// One entry of a track list.
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    Size(Length),
    /// `repeat(count, tracks…)`.
    Repeat(u16, Vec<Length>),
}

/// A parsed track list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridTemplate {
    pub tracks: Vec<Track>,
}

impl GridTemplate {
    /// `count` equal-width `1fr` columns.
    pub fn equal(count: u16) -> Self {
        Self {
            tracks: vec![Track::Repeat(count, vec![Length::fr(1.0)])],
        }
    }

    /// Number of columns the template produces.
    pub fn column_count(&self) -> usize {
        self.tracks
            .iter()
            .map(|t| match t {
                Track::Size(_) => 1,
                Track::Repeat(count, sizes) => *count as usize * sizes.len(),
            })
            .sum()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Size(length) => write!(f, "{length}"),
            Track::Repeat(count, sizes) => {
                let sizes: Vec<String> = sizes.iter().map(Length::to_string).collect();
                write!(f, "repeat({count}, {})", sizes.join(" "))
            }
        }
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tracks: Vec<String> = self.tracks.iter().map(Track::to_string).collect();
        f.write_str(&tracks.join(" "))
    }
}

impl FromStr for GridTemplate {
    type Err = ZcssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_grid_template(s)
    }
}
