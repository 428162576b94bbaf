//! The breakpoint table.
//!
//! Breakpoints are totally ordered: `base < xs < sm < md < lg`. Every
//! breakpoint except `base` carries a min-width threshold in pixels, and the
//! thresholds strictly increase in breakpoint order. `base` is the
//! unconditional styling applied before any media query.
//!
//! | Breakpoint | Min width |
//! |------------|-----------|
//! | `base`     | (none)    |
//! | `xs`       | 480px     |
//! | `sm`       | 640px     |
//! | `md`       | 1024px    |
//! | `lg`       | 1280px    |

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Result, ZcssError};

/// A named viewport-width threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Breakpoint {
    /// Unconditional styling, no media query.
    #[default]
    Base,
    Xs,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    /// Every breakpoint in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Base,
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
    ];

    /// The breakpoints that open a media query, ascending.
    pub const MEDIA: [Breakpoint; 4] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
    ];

    /// The fixed ascending sequence `[base, xs, sm, md, lg]`.
    pub fn order() -> &'static [Breakpoint] {
        &Self::ALL
    }

    /// Min-width threshold in pixels, or `None` for `base`.
    pub const fn min_width(self) -> Option<u32> {
        match self {
            Breakpoint::Base => None,
            Breakpoint::Xs => Some(480),
            Breakpoint::Sm => Some(640),
            Breakpoint::Md => Some(1024),
            Breakpoint::Lg => Some(1280),
        }
    }

    /// Min-width threshold in pixels.
    ///
    /// `base` has no threshold; callers must special-case it.
    pub fn threshold_of(self) -> Result<u32> {
        self.min_width().ok_or(ZcssError::MissingThreshold(self))
    }

    /// The name used in custom properties and data attributes.
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }

    /// The `@media (min-width: Npx)` guard for this breakpoint.
    pub fn media_query(self) -> Option<String> {
        self.min_width()
            .map(|px| format!("@media (min-width: {px}px)"))
    }

    /// Position in [`Breakpoint::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next smaller breakpoint, if any.
    pub fn previous(self) -> Option<Breakpoint> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// The largest breakpoint whose threshold is at most `width`.
    pub fn for_width(width: u32) -> Breakpoint {
        Self::MEDIA
            .iter()
            .rev()
            .copied()
            .find(|bp| bp.min_width().is_some_and(|min| width >= min))
            .unwrap_or(Breakpoint::Base)
    }

    fn flag(self) -> BreakpointSet {
        match self {
            Breakpoint::Base => BreakpointSet::BASE,
            Breakpoint::Xs => BreakpointSet::XS,
            Breakpoint::Sm => BreakpointSet::SM,
            Breakpoint::Md => BreakpointSet::MD,
            Breakpoint::Lg => BreakpointSet::LG,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = ZcssError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "base" => Ok(Breakpoint::Base),
            "xs" => Ok(Breakpoint::Xs),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            other => Err(ZcssError::UnknownBreakpoint(other.to_string())),
        }
    }
}

bitflags! {
    /// A set of breakpoints, typically the ones a responsive value defines.
    ///
    /// # Example
    ///
    /// ```
    /// use zcss::{Breakpoint, BreakpointSet};
    ///
    /// let set = BreakpointSet::BASE | BreakpointSet::MD;
    /// let listed: Vec<_> = set.breakpoints().collect();
    /// assert_eq!(listed, vec![Breakpoint::Base, Breakpoint::Md]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BreakpointSet: u8 {
        const BASE = 0b0000_0001;
        const XS   = 0b0000_0010;
        const SM   = 0b0000_0100;
        const MD   = 0b0000_1000;
        const LG   = 0b0001_0000;
    }
}

impl BreakpointSet {
    /// Adds a single breakpoint.
    pub fn with(self, bp: Breakpoint) -> Self {
        self | bp.flag()
    }

    /// Whether the set holds `bp`.
    pub fn has(&self, bp: Breakpoint) -> bool {
        self.contains(bp.flag())
    }

    /// The members in ascending breakpoint order.
    pub fn breakpoints(self) -> impl Iterator<Item = Breakpoint> {
        Breakpoint::ALL.into_iter().filter(move |bp| self.has(*bp))
    }
}

impl FromIterator<Breakpoint> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        iter.into_iter().fold(BreakpointSet::empty(), BreakpointSet::with)
    }
}
