//! Responsive styling for Zen design-system components.
//!
//! This crate bundles the two layers:
//!
//! - [`zcss`]: responsive values, breakpoints, and the CSS emitters
//! - [`zen`]: the components built on top of them
//!
//! Most users only need the prelude:
//!
//! ```
//! use zen_design::prelude::*;
//!
//! let theme = Theme::default();
//! let ctx = StyleContext::new(&theme);
//!
//! let grid = ShojiGridProps::new()
//!     .columns(responsive! { base: GridTemplate::equal(1), md: GridTemplate::equal(3) })
//!     .gap(responsive! { base: Space::Sm, md: Space::Md });
//! let cell = ShojiGridCellProps::new().shadow_right(responsive! { base: false, md: true });
//!
//! let style = cell.style(&grid.child_context(&ctx));
//! let md = style.scoped.nested("@media (min-width: 1024px)").unwrap();
//! assert_eq!(md.nested("&::after").unwrap().get("width"), Some("16px"));
//! ```

pub use zcss;
pub use zen;

pub mod prelude {
    pub use zcss::{
        Breakpoint, FontSize, GridTemplate, IconSize, Responsive, ResponsiveProps, Space,
        StyleBlock, Theme, responsive,
    };
    pub use zen::{
        BoxProps, ButtonProps, ButtonSize, ButtonVariant, Component, FlexAlign, FlexDirection,
        FlexProps, HeadingProps, IconProps, ShojiGridCellProps, ShojiGridProps, StyleContext,
        ResponsiveProps, StyleOutput, component_stylesheet,
    };
}
