//! Ambient styling context passed down the component tree.
//!
//! Most components only need the theme. Grid cells also need the gap of the
//! grid that contains them, which they never receive as a prop: the grid
//! publishes it through [`StyleContext::with_gap`].

use zcss::{Responsive, Space, Theme};

/// Context inherited from the parent when computing a component's style.
#[derive(Clone, Debug)]
pub struct StyleContext<'a> {
    pub theme: &'a Theme,
    /// Gap of the enclosing grid, if any.
    pub gap: Option<Responsive<Space>>,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme, gap: None }
    }

    /// Context for children of a grid with the given gap.
    pub fn with_gap(&self, gap: Option<Responsive<Space>>) -> Self {
        Self {
            theme: self.theme,
            gap,
        }
    }
}
