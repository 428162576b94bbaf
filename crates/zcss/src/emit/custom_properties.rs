//! Custom-property emission.
//!
//! One `--{component}-{prop}-{breakpoint}` entry per explicitly defined
//! breakpoint. Nothing is carried forward between breakpoints here: the
//! companion stylesheet reads the properties through `var()` fallback chains
//! (see [`var_fallback_chain`](super::companion::var_fallback_chain)), so the
//! browser resolves the cascade.

use crate::emit::entries::Entries;
use crate::types::{Breakpoint, Responsive};

/// Ordered `name → value` custom properties, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomProperties {
    entries: Entries,
}

impl CustomProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing an earlier value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter()
    }

    /// Appends every entry of `other`.
    pub fn extend(&mut self, other: CustomProperties) {
        for (name, value) in other.entries.into_pairs() {
            self.insert(name, value);
        }
    }

    /// Renders as an inline `style` attribute value.
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(n, v)| format!("{n}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CustomProperties {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut props = CustomProperties::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

/// `--{component}-{prop}-{breakpoint}`.
pub fn custom_property_name(component: &str, prop: &str, bp: Breakpoint) -> String {
    format!("--{component}-{prop}-{bp}")
}

/// Emits one custom property per explicitly defined breakpoint.
///
/// A simple value defines only `base`.
///
/// ```
/// use zcss::{responsive, emit_custom_properties};
///
/// let padding = responsive! { base: "8px".to_string(), md: "24px".to_string() };
/// let props = emit_custom_properties("box", "padding", &padding);
/// assert_eq!(props.get("--box-padding-base"), Some("8px"));
/// assert_eq!(props.get("--box-padding-md"), Some("24px"));
/// assert_eq!(props.len(), 2);
/// ```
pub fn emit_custom_properties(
    component: &str,
    prop: &str,
    value: &Responsive<String>,
) -> CustomProperties {
    let props: CustomProperties = value
        .entries()
        .into_iter()
        .map(|(bp, css)| (custom_property_name(component, prop, bp), css.clone()))
        .collect();

    log::trace!(
        "CUSTOM PROPS: {}.{} -> {} entries",
        component,
        prop,
        props.len()
    );
    props
}
