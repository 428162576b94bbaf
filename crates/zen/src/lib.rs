//! Zen components.
//!
//! Each component is a props struct whose [`Component::style`] turns its
//! responsive props into class names, inline custom properties, scoped CSS
//! and data attributes through the `zcss` engine.
//!
//! ```
//! use zcss::{Space, Theme, responsive};
//! use zen::{BoxProps, Component, StyleContext};
//!
//! let theme = Theme::default();
//! let props = BoxProps::new().padding(responsive! { base: Space::Sm, md: Space::Lg });
//! let style = props.style(&StyleContext::new(&theme));
//!
//! assert_eq!(style.class_attr(), "zen-box");
//! assert_eq!(style.scoped.get("padding"), Some("8px"));
//! assert_eq!(
//!     style.data_attributes.get("data-has-responsive-padding"),
//!     Some("true")
//! );
//! ```

pub mod component;
pub mod context;
pub mod log_init;
pub mod styles;
pub mod stylesheet;

pub use component::button::{ButtonProps, ButtonSize, ButtonVariant};
pub use component::flex::{FlexAlign, FlexDirection, FlexProps};
pub use component::heading::HeadingProps;
pub use component::icon::IconProps;
pub use component::layout_box::BoxProps;
pub use component::shoji_grid::{ShojiGridCellProps, ShojiGridProps};
pub use component::{Component, StyleOutput};
pub use context::StyleContext;
pub use styles::{InsetShadow, inset_shadow_styles, visible_styles};
pub use stylesheet::component_stylesheet;
pub use zen_macros::ResponsiveProps;
