//! # ZCSS - Responsive style resolution
//!
//! The engine behind every Zen Design prop that can vary by screen width.
//! A prop value is a [`Responsive<T>`]: one value, or a partial map from
//! [`Breakpoint`] to value. The engine turns it into style output:
//!
//! - **Custom properties**: `--{component}-{prop}-{bp}` per defined breakpoint,
//!   read by companion rules through `var()` fallback chains
//! - **Scoped declarations**: a base declaration plus one
//!   `@media (min-width: Npx)` block per defined breakpoint
//! - **Data attributes**: `data-has-responsive-<prop>` markers gating the
//!   companion rules
//!
//! ## Quick Start
//!
//! ```rust
//! use zcss::{Space, Theme, emit_custom_properties, emit_scoped_declarations, normalize, responsive};
//!
//! let theme = Theme::default();
//! let padding = responsive! { base: Space::Sm, md: Space::Lg };
//!
//! let css = normalize(Some(&padding), |s| theme.space_css(s)).unwrap();
//! let props = emit_custom_properties("box", "padding", &css);
//! assert_eq!(props.get("--box-padding-base"), Some("8px"));
//! assert_eq!(props.get("--box-padding-md"), Some("24px"));
//!
//! let block = emit_scoped_declarations("padding", &padding, |s| theme.space_css(s));
//! assert_eq!(
//!     block.to_css(".box"),
//!     ".box {\n  padding: 8px;\n}\n@media (min-width: 1024px) {\n  .box {\n    padding: 24px;\n  }\n}\n"
//! );
//! ```
//!
//! ## Breakpoints
//!
//! `base < xs (480px) < sm (640px) < md (1024px) < lg (1280px)`
//!
//! ## Modules
//!
//! - [`types`]: breakpoints, responsive values, tokens, theme, lengths
//! - [`emit`]: the emitters and the CSS text renderer
//! - [`parser`]: length and grid-template parsers
//! - [`error`]: error types

pub mod emit;
pub mod error;
pub mod parser;
pub mod types;

pub use emit::{
    AttrValue, CustomProperties, DataAttributeOptions, DataAttributes, PropEntry,
    ResponsiveProps, StyleBlock, ToAttrValue, attr_entry, companion_rules,
    custom_property_name, emit_custom_properties, emit_data_attributes,
    emit_scoped_declarations, emit_scoped_optional, has_responsive_attribute, kebab_case,
    var_fallback_chain,
};
pub use error::{Result, ZcssError};
pub use types::{
    Breakpoint, BreakpointMap, BreakpointSet, FontSize, GridTemplate, IconSize, Length,
    Responsive, Space, Theme, Track, Unit, is_breakpoint_keyed, normalize, resolve_base,
    union_defined,
};
