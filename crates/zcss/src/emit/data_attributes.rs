//! Data-attribute emission.
//!
//! Companion stylesheets gate their media rules on
//! `data-has-responsive-<prop>`, so only instances that actually vary a prop
//! by breakpoint pick up those rules. Optionally, every explicit breakpoint
//! value is exposed as `data-<prop>-<bp>` for attribute selectors.
//!
//! Prop names are kebab-cased: `paddingHorizontal` and `padding_horizontal`
//! both become `padding-horizontal`.

use std::fmt;

use crate::emit::entries::Entries;
use crate::types::{FontSize, GridTemplate, IconSize, Responsive, Space};

/// A prop value as it appears in an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Bool(bool),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Text(text) => f.write_str(text),
        }
    }
}

/// Conversion of prop values into attribute values.
pub trait ToAttrValue {
    fn to_attr_value(&self) -> AttrValue;
}

impl ToAttrValue for bool {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Bool(*self)
    }
}

impl ToAttrValue for String {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.clone())
    }
}

impl ToAttrValue for &str {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text((*self).to_string())
    }
}

macro_rules! display_attr_value {
    ($($ty:ty),+) => {
        $(
            impl ToAttrValue for $ty {
                fn to_attr_value(&self) -> AttrValue {
                    AttrValue::Text(self.to_string())
                }
            }
        )+
    };
}

display_attr_value!(u8, u16, u32, i32, f64, Space, FontSize, IconSize, GridTemplate);

/// Options for [`emit_data_attributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataAttributeOptions {
    /// Also emit `data-<prop>-<bp>` for every explicit breakpoint.
    pub include_breakpoint_values: bool,
}

impl DataAttributeOptions {
    pub fn with_breakpoint_values() -> Self {
        Self {
            include_breakpoint_values: true,
        }
    }
}

/// Ordered attribute `name → value` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataAttributes {
    entries: Entries,
}

impl DataAttributes {
    pub fn new() -> Self {
        Self::default()
    }

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
}

/// A prop name and its optional responsive value, as listed by
/// [`ResponsiveProps`].
pub type PropEntry = (&'static str, Option<Responsive<AttrValue>>);

/// Props structs whose responsive fields feed the data-attribute emitter.
///
/// Usually derived with `#[derive(ResponsiveProps)]`.
pub trait ResponsiveProps {
    /// Every responsive prop, in declaration order.
    fn responsive_props(&self) -> Vec<PropEntry>;

    fn data_attributes(&self, options: DataAttributeOptions) -> DataAttributes {
        emit_data_attributes(&self.responsive_props(), options)
    }
}

/// Converts `camelCase` and `snake_case` prop names to `kebab-case`.
///
/// Runs of capitals stay together, so `htmlID` becomes `html-id` and
/// `HTMLId` becomes `html-id`.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push('-');
            continue;
        }
        if c.is_ascii_uppercase() && !out.is_empty() && !out.ends_with('-') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            // New word: after a lowercase letter or digit, or the last capital
            // of a run that starts a new word (`HTMLId` -> `html-id`)
            if !prev.is_ascii_uppercase() || next_is_lower {
                out.push('-');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// `data-has-responsive-<prop>`.
pub fn has_responsive_attribute(prop: &str) -> String {
    format!("data-has-responsive-{}", kebab_case(prop))
}

/// Emits marker attributes for every prop given as a per-breakpoint value.
///
/// Simple values, absent props and per-breakpoint values that define no
/// breakpoint produce nothing. With
/// `include_breakpoint_values`, each explicit entry is also emitted as
/// `data-<prop>-<bp>`. An explicit `false` is kept, so "explicitly false"
/// stays distinguishable from "unset".
pub fn emit_data_attributes(props: &[PropEntry], options: DataAttributeOptions) -> DataAttributes {
    let mut attrs = DataAttributes::new();

    for (name, value) in props {
        let Some(Responsive::PerBreakpoint(map)) = value else {
            continue;
        };
        if map.is_empty() {
            continue;
        }

        attrs.insert(has_responsive_attribute(name), "true");

        if options.include_breakpoint_values {
            let prop = kebab_case(name);
            for (bp, entry) in map.iter() {
                attrs.insert(format!("data-{prop}-{bp}"), entry.to_string());
            }
        }
    }

    log::trace!("DATA ATTRS: {} props -> {} attributes", props.len(), attrs.len());
    attrs
}

/// Converts an optional responsive prop into a [`PropEntry`] value.
pub fn attr_entry<T: ToAttrValue>(value: Option<&Responsive<T>>) -> Option<Responsive<AttrValue>> {
    value.map(|v| v.map(ToAttrValue::to_attr_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_handles_both_styles() {
        assert_eq!(kebab_case("paddingHorizontal"), "padding-horizontal");
        assert_eq!(kebab_case("padding_horizontal"), "padding-horizontal");
        assert_eq!(kebab_case("gap"), "gap");
    }

    #[test]
    fn kebab_case_keeps_capital_runs() {
        assert_eq!(kebab_case("HTMLId"), "html-id");
        assert_eq!(kebab_case("htmlID"), "html-id");
        assert_eq!(kebab_case("ariaLabelURL"), "aria-label-url");
        assert_eq!(kebab_case("Padding"), "padding");
    }

    #[test]
    fn bool_values_render_as_words() {
        assert_eq!(AttrValue::Bool(false).to_string(), "false");
        assert_eq!(Space::Md.to_attr_value(), AttrValue::Text("md".into()));
    }
}
