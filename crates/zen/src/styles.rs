//! Style generators shared by several components.
//!
//! - [`visible`]: responsive booleans to `display: none` / `display: revert`
//! - [`shadow`]: grid-cell inset shadows drawn with pseudo-elements

pub mod shadow;
pub mod visible;

pub use shadow::{InsetShadow, inset_shadow_styles};
pub use visible::visible_styles;
