//! Heading: `h1`–`h6` with a responsive size.

use zcss::{
    DataAttributeOptions, FontSize, Responsive, ResponsiveProps, StyleBlock, companion_rules,
    emit_custom_properties, normalize,
};
use zen_macros::ResponsiveProps;

use crate::component::{Component, StyleOutput};
use crate::context::StyleContext;

#[derive(Debug, Clone, PartialEq, ResponsiveProps)]
pub struct HeadingProps {
    /// Heading level, 1 through 6.
    pub level: u8,
    pub size: Option<Responsive<FontSize>>,
}

impl Default for HeadingProps {
    fn default() -> Self {
        Self {
            level: 2,
            size: None,
        }
    }
}

impl HeadingProps {
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(1, 6),
            size: None,
        }
    }

    pub fn size(mut self, value: impl Into<Responsive<FontSize>>) -> Self {
        self.size = Some(value.into());
        self
    }

    /// The HTML tag for the level.
    pub fn tag(&self) -> String {
        format!("h{}", self.level.clamp(1, 6))
    }

    /// Size used when no `size` prop is given.
    pub fn default_size(&self) -> FontSize {
        match self.level {
            0 | 1 => FontSize::Xxl,
            2 => FontSize::Xl,
            3 => FontSize::Lg,
            4 => FontSize::Md,
            5 => FontSize::Sm,
            _ => FontSize::Xs,
        }
    }

    pub fn companion() -> StyleBlock {
        companion_rules(Self::NAME, "size", "font-size")
    }
}

impl Component for HeadingProps {
    const NAME: &'static str = "heading";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let theme = ctx.theme;
        let size = self
            .size
            .as_ref()
            .map(Responsive::with_base_filled)
            .unwrap_or(Responsive::Simple(self.default_size()));

        // Class names cannot vary by width; they follow the base size
        let base = size.resolve_base(self.default_size());
        let class_names = vec![
            theme.class_name(&[Self::NAME]),
            theme.class_name(&[Self::NAME, base.name()]),
        ];

        let inline = normalize(Some(&size), |s| theme.font_size_css(s))
            .map(|css| emit_custom_properties(Self::NAME, "size", &css))
            .unwrap_or_default();

        log::debug!(
            "STYLE: component={} base_size={} custom_properties={}",
            Self::NAME,
            base,
            inline.len()
        );

        StyleOutput {
            class_names,
            inline,
            data_attributes: self.data_attributes(DataAttributeOptions::default()),
            ..Default::default()
        }
    }
}
