//! Procedural macros for the Zen Design component layer.
//!
//! This crate provides `#[derive(ResponsiveProps)]`, which lists a props
//! struct's responsive fields for the data-attribute emitter.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parse;

/// Derives `zcss::ResponsiveProps` for a props struct.
///
/// Every field typed `Option<Responsive<T>>` becomes a prop entry, in
/// declaration order. `T` must implement `zcss::ToAttrValue`. Other fields
/// are ignored.
///
/// # Syntax
///
/// ```ignore
/// #[derive(ResponsiveProps)]
/// struct FlexProps {
///     gap: Option<Responsive<Space>>,
///
///     // Attribute name taken from the rename: data-has-responsive-is-visible
///     #[responsive(rename = "isVisible")]
///     visible: Option<Responsive<bool>>,
///
///     // Left out of the data attributes entirely
///     #[responsive(skip)]
///     direction: Option<Responsive<Direction>>,
///
///     id: Option<String>,
/// }
/// ```
#[proc_macro_derive(ResponsiveProps, attributes(responsive))]
pub fn derive_responsive_props(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match parse::PropsStruct::from_derive(&input) {
        Ok(props) => codegen::generate(&input, &props).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
