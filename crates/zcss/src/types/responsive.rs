//! The responsive value model.
//!
//! Every styleable prop accepts a [`Responsive<T>`]: either a single value
//! applied at every width, or a partial per-breakpoint map. The two cases are
//! distinct variants, so a plain value that happens to contain a key named
//! `md` can never be mistaken for a per-breakpoint map.
//!
//! ## Resolution rules
//!
//! - [`Responsive::resolve_base`]: the explicit `base` entry, else the first
//!   defined breakpoint in ascending order, else the fallback.
//! - [`Responsive::resolve_at`]: the explicit entry at a breakpoint, else the
//!   nearest smaller defined entry, else the `resolve_base` rule.
//!
//! Normalization never fills gaps: breakpoints absent from the input stay
//! absent in the output.

use crate::error::{Result, ZcssError};
use crate::types::breakpoint::{Breakpoint, BreakpointSet};

/// A partial mapping from breakpoint to value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreakpointMap<T> {
    entries: [Option<T>; 5],
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            entries: [None, None, None, None, None],
        }
    }
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`BreakpointMap::set`].
    pub fn with(mut self, bp: Breakpoint, value: T) -> Self {
        self.set(bp, value);
        self
    }

    pub fn set(&mut self, bp: Breakpoint, value: T) {
        self.entries[bp.index()] = Some(value);
    }

    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.entries[bp.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Defined entries in ascending breakpoint order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .into_iter()
            .zip(self.entries.iter())
            .filter_map(|(bp, value)| value.as_ref().map(|v| (bp, v)))
    }

    /// The first defined entry in ascending order.
    pub fn first(&self) -> Option<(Breakpoint, &T)> {
        self.iter().next()
    }

    pub fn defined(&self) -> BreakpointSet {
        self.iter().map(|(bp, _)| bp).collect()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> BreakpointMap<U> {
        let mut out = BreakpointMap::new();
        for (bp, value) in self.iter() {
            out.set(bp, f(value));
        }
        out
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut map = BreakpointMap::new();
        for (bp, value) in iter {
            map.set(bp, value);
        }
        map
    }
}

/// A value, or a per-breakpoint partial map of values.
///
/// # Example
///
/// ```
/// use zcss::{Breakpoint, Responsive, responsive};
///
/// let padding: Responsive<&str> = responsive! { md: "lg", lg: "xl" };
/// assert!(padding.is_responsive());
/// assert_eq!(padding.resolve_base("none"), "lg");
/// assert_eq!(padding.resolve_at(Breakpoint::Sm, "none"), "lg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Responsive<T> {
    /// One value for every width.
    Simple(T),
    /// Values for the breakpoints that are explicitly set.
    PerBreakpoint(BreakpointMap<T>),
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Simple(value)
    }
}

impl<T> From<BreakpointMap<T>> for Responsive<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        Responsive::PerBreakpoint(map)
    }
}

impl<T> Responsive<T> {
    /// Builds a per-breakpoint value from string-keyed pairs, such as the
    /// keys of an externally supplied object.
    ///
    /// Input with no keys is not a responsive object and is rejected.
    pub fn from_keyed<K, I>(pairs: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut map = BreakpointMap::new();
        for (key, value) in pairs {
            map.set(key.as_ref().parse()?, value);
        }
        if map.is_empty() {
            return Err(ZcssError::EmptyResponsive);
        }
        Ok(Responsive::PerBreakpoint(map))
    }

    /// True for the per-breakpoint variant.
    pub fn is_responsive(&self) -> bool {
        matches!(self, Responsive::PerBreakpoint(_))
    }

    /// The explicit entry at `bp`. A simple value only defines `base`.
    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        match self {
            Responsive::Simple(value) => (bp == Breakpoint::Base).then_some(value),
            Responsive::PerBreakpoint(map) => map.get(bp),
        }
    }

    /// Explicit entries in ascending order.
    pub fn entries(&self) -> Vec<(Breakpoint, &T)> {
        match self {
            Responsive::Simple(value) => vec![(Breakpoint::Base, value)],
            Responsive::PerBreakpoint(map) => map.iter().collect(),
        }
    }

    pub fn defined(&self) -> BreakpointSet {
        match self {
            Responsive::Simple(_) => BreakpointSet::BASE,
            Responsive::PerBreakpoint(map) => map.defined(),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Responsive<U> {
        match self {
            Responsive::Simple(value) => Responsive::Simple(f(value)),
            Responsive::PerBreakpoint(map) => Responsive::PerBreakpoint(map.map(f)),
        }
    }

    /// The representative value for contexts that cannot vary by width.
    pub fn base_value(&self) -> Option<&T> {
        match self {
            Responsive::Simple(value) => Some(value),
            Responsive::PerBreakpoint(map) => map
                .get(Breakpoint::Base)
                .or_else(|| map.first().map(|(_, v)| v)),
        }
    }

    /// The explicit entry at `bp`, else the nearest smaller defined entry.
    ///
    /// Nothing is in effect below the first defined breakpoint.
    pub fn value_at(&self, bp: Breakpoint) -> Option<&T> {
        match self {
            Responsive::Simple(value) => Some(value),
            Responsive::PerBreakpoint(map) => Breakpoint::ALL[..=bp.index()]
                .iter()
                .rev()
                .find_map(|smaller| map.get(*smaller)),
        }
    }

    /// Like [`Responsive::value_at`], falling back to the representative base
    /// value below the first defined breakpoint.
    pub fn cascade_at(&self, bp: Breakpoint) -> Option<&T> {
        self.value_at(bp).or_else(|| self.base_value())
    }
}

impl<T: Clone> Responsive<T> {
    pub fn resolve_base(&self, fallback: T) -> T {
        self.base_value().cloned().unwrap_or(fallback)
    }

    pub fn resolve_at(&self, bp: Breakpoint, fallback: T) -> T {
        self.cascade_at(bp).cloned().unwrap_or(fallback)
    }

    /// Copy with `base` filled from the first defined entry, for callers of
    /// the custom-property strategy that need a `base` property to exist.
    pub fn with_base_filled(&self) -> Responsive<T> {
        match self {
            Responsive::PerBreakpoint(map) if map.get(Breakpoint::Base).is_none() => {
                let mut filled = map.clone();
                if let Some((_, first)) = map.first() {
                    filled.set(Breakpoint::Base, first.clone());
                }
                Responsive::PerBreakpoint(filled)
            }
            other => other.clone(),
        }
    }
}

/// Applies `to_css` to every explicitly defined entry.
///
/// `None` stays `None`. Absent breakpoints stay absent.
pub fn normalize<T>(
    value: Option<&Responsive<T>>,
    to_css: impl FnMut(&T) -> String,
) -> Option<Responsive<String>> {
    value.map(|v| v.map(to_css))
}

pub fn resolve_base<T: Clone>(value: &Responsive<T>, fallback: T) -> T {
    value.resolve_base(fallback)
}

/// Structural test for externally supplied string-keyed objects: true when
/// at least one key is a breakpoint name.
pub fn is_breakpoint_keyed<'a>(keys: impl IntoIterator<Item = &'a str>) -> bool {
    keys.into_iter()
        .any(|key| key.parse::<Breakpoint>().is_ok())
}

/// The union of breakpoints defined by any of `values`.
pub fn union_defined<'a, T: 'a>(
    values: impl IntoIterator<Item = Option<&'a Responsive<T>>>,
) -> BreakpointSet {
    values
        .into_iter()
        .flatten()
        .fold(BreakpointSet::empty(), |acc, v| acc | v.defined())
}

/// Builds a [`Responsive::PerBreakpoint`] from `breakpoint: value` pairs.
///
/// ```
/// use zcss::{Breakpoint, responsive};
///
/// let gap = responsive! { base: 8, md: 16 };
/// assert_eq!(gap.get(Breakpoint::Md), Some(&16));
/// ```
#[macro_export]
macro_rules! responsive {
    (@bp base) => { $crate::Breakpoint::Base };
    (@bp xs) => { $crate::Breakpoint::Xs };
    (@bp sm) => { $crate::Breakpoint::Sm };
    (@bp md) => { $crate::Breakpoint::Md };
    (@bp lg) => { $crate::Breakpoint::Lg };

    ($($bp:ident : $value:expr),+ $(,)?) => {{
        let mut map = $crate::BreakpointMap::new();
        $( map.set($crate::responsive!(@bp $bp), $value); )+
        $crate::Responsive::PerBreakpoint(map)
    }};
}
