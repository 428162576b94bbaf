pub mod breakpoint;
pub mod geometry;
pub mod grid;
pub mod responsive;
pub mod theme;
pub mod tokens;

pub use breakpoint::{Breakpoint, BreakpointSet};
pub use geometry::{Length, Unit};
pub use grid::{GridTemplate, Track};
pub use responsive::{
    BreakpointMap, Responsive, is_breakpoint_keyed, normalize, resolve_base, union_defined,
};
pub use theme::Theme;
pub use tokens::{FontSize, IconSize, Space};
