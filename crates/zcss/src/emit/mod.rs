//! Style emitters.
//!
//! - [`custom_properties`]: sparse `--{component}-{prop}-{bp}` properties
//! - [`scoped`]: base declaration plus `@media (min-width)` blocks
//! - [`data_attributes`]: `data-has-responsive-<prop>` markers
//! - [`companion`]: `var()` fallback-chain rules for the custom-property strategy
//! - [`block`]: the nested [`StyleBlock`] and its CSS text rendering
//!
//! Every emitter is a pure function of its inputs: the same inputs always
//! yield structurally equal output.

pub mod block;
pub mod companion;
pub mod custom_properties;
pub mod data_attributes;
mod entries;
pub mod scoped;

pub use block::StyleBlock;
pub use companion::{companion_rules, var_fallback_chain};
pub use custom_properties::{CustomProperties, custom_property_name, emit_custom_properties};
pub use data_attributes::{
    AttrValue, DataAttributeOptions, DataAttributes, PropEntry, ResponsiveProps, ToAttrValue,
    attr_entry, emit_data_attributes, has_responsive_attribute, kebab_case,
};
pub use scoped::{emit_scoped_declarations, emit_scoped_optional};
