//! Flex: a flexbox container.
//!
//! Uses the custom-property strategy. Each responsive prop is set inline as
//! `--flex-<prop>-<bp>`, and the companion rules built by
//! [`FlexProps::companion`] read them back through `var()` fallback chains.
//! Marker attributes gate those rules per instance.

use std::fmt;

use zcss::{
    AttrValue, CustomProperties, DataAttributeOptions, Responsive, ResponsiveProps, Space,
    StyleBlock, ToAttrValue, companion_rules, emit_custom_properties, normalize,
};
use zen_macros::ResponsiveProps;

use crate::component::{Component, StyleOutput};
use crate::context::StyleContext;
use crate::styles::visible_styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

/// Cross-axis (`align-items`) and main-axis (`justify-content`) placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexAlign {
    #[default]
    Start,
    Center,
    End,
    Stretch,
    Between,
}

impl FlexAlign {
    pub fn css(&self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
            FlexAlign::Stretch => "stretch",
            FlexAlign::Between => "space-between",
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

impl fmt::Display for FlexAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

impl ToAttrValue for FlexDirection {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.to_string())
    }
}

impl ToAttrValue for FlexAlign {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, ResponsiveProps)]
pub struct FlexProps {
    pub gap: Option<Responsive<Space>>,
    pub direction: Option<Responsive<FlexDirection>>,
    pub align: Option<Responsive<FlexAlign>>,
    pub justify: Option<Responsive<FlexAlign>>,
    #[responsive(skip)]
    pub visible: Option<Responsive<bool>>,
}

/// `(prop, css property)` pairs read by the companion rules.
const COMPANION_PROPS: [(&str, &str); 4] = [
    ("gap", "gap"),
    ("direction", "flex-direction"),
    ("align", "align-items"),
    ("justify", "justify-content"),
];

impl FlexProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, value: impl Into<Responsive<Space>>) -> Self {
        self.gap = Some(value.into());
        self
    }

    pub fn direction(mut self, value: impl Into<Responsive<FlexDirection>>) -> Self {
        self.direction = Some(value.into());
        self
    }

    pub fn align(mut self, value: impl Into<Responsive<FlexAlign>>) -> Self {
        self.align = Some(value.into());
        self
    }

    pub fn justify(mut self, value: impl Into<Responsive<FlexAlign>>) -> Self {
        self.justify = Some(value.into());
        self
    }

    pub fn visible(mut self, value: impl Into<Responsive<bool>>) -> Self {
        self.visible = Some(value.into());
        self
    }

    /// Companion stylesheet block for the flex class.
    pub fn companion() -> StyleBlock {
        let mut block = StyleBlock::new().with("display", "flex");
        for (prop, property) in COMPANION_PROPS {
            block.merge(companion_rules(Self::NAME, prop, property));
        }
        // Unset direction falls back to the flexbox default
        block.declare("flex-direction", "var(--flex-direction-base, row)");
        block
    }
}

/// Custom properties for one prop, with `base` filled so the companion base
/// rule always has a value to read.
fn prop_properties<T: Clone>(
    prop: &str,
    value: Option<&Responsive<T>>,
    to_css: impl FnMut(&T) -> String,
) -> CustomProperties {
    let filled = value.map(Responsive::with_base_filled);
    normalize(filled.as_ref(), to_css)
        .map(|css| emit_custom_properties(FlexProps::NAME, prop, &css))
        .unwrap_or_default()
}

impl Component for FlexProps {
    const NAME: &'static str = "flex";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let theme = ctx.theme;

        let mut inline = CustomProperties::new();
        inline.extend(prop_properties("gap", self.gap.as_ref(), |s| {
            theme.space_css(s)
        }));
        inline.extend(prop_properties("direction", self.direction.as_ref(), |d| {
            d.css().to_string()
        }));
        inline.extend(prop_properties("align", self.align.as_ref(), |a| {
            a.css().to_string()
        }));
        inline.extend(prop_properties("justify", self.justify.as_ref(), |a| {
            a.css().to_string()
        }));

        let scoped = self
            .visible
            .as_ref()
            .map(visible_styles)
            .unwrap_or_default();

        log::debug!(
            "STYLE: component={} custom_properties={}",
            Self::NAME,
            inline.len()
        );

        StyleOutput {
            class_names: vec![theme.class_name(&[Self::NAME])],
            inline,
            scoped,
            data_attributes: self.data_attributes(DataAttributeOptions::default()),
        }
    }
}
