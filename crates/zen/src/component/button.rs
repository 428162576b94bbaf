//! Button with a responsive variant and size.

use std::fmt;

use zcss::{
    AttrValue, DataAttributeOptions, Responsive, ResponsiveProps, Space, StyleBlock, ToAttrValue,
    Theme, emit_scoped_declarations,
};
use zen_macros::ResponsiveProps;

use crate::component::{Component, StyleOutput};
use crate::context::StyleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn name(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }

    /// Vertical and horizontal padding tokens.
    fn padding(self) -> (Space, Space) {
        match self {
            ButtonSize::Sm => (Space::Xs, Space::Sm),
            ButtonSize::Md => (Space::Sm, Space::Md),
            ButtonSize::Lg => (Space::Md, Space::Lg),
        }
    }

    fn padding_css(self, theme: &Theme) -> String {
        let (vertical, horizontal) = self.padding();
        format!("{} {}", theme.space_css(&vertical), theme.space_css(&horizontal))
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ToAttrValue for ButtonVariant {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.to_string())
    }
}

impl ToAttrValue for ButtonSize {
    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, ResponsiveProps)]
pub struct ButtonProps {
    pub variant: Option<Responsive<ButtonVariant>>,
    pub size: Option<Responsive<ButtonSize>>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, value: impl Into<Responsive<ButtonVariant>>) -> Self {
        self.variant = Some(value.into());
        self
    }

    pub fn size(mut self, value: impl Into<Responsive<ButtonSize>>) -> Self {
        self.size = Some(value.into());
        self
    }
}

impl Component for ButtonProps {
    const NAME: &'static str = "button";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let theme = ctx.theme;
        let variant = self
            .variant
            .as_ref()
            .map_or(ButtonVariant::default(), |v| v.resolve_base(ButtonVariant::default()));
        let size = self
            .size
            .as_ref()
            .map_or(ButtonSize::default(), |s| s.resolve_base(ButtonSize::default()));

        let scoped = match &self.size {
            Some(sizes) => emit_scoped_declarations("padding", sizes, |s| s.padding_css(theme)),
            None => StyleBlock::new().with("padding", size.padding_css(theme)),
        };

        log::debug!(
            "STYLE: component={} variant={} size={} media={}",
            Self::NAME,
            variant,
            size,
            scoped.media_keys().len()
        );

        StyleOutput {
            class_names: vec![
                theme.class_name(&[Self::NAME]),
                theme.class_name(&[Self::NAME, variant.name()]),
                theme.class_name(&[Self::NAME, size.name()]),
            ],
            scoped,
            // Variant styling beyond base is driven by attribute selectors
            data_attributes: self.data_attributes(DataAttributeOptions::with_breakpoint_values()),
            ..Default::default()
        }
    }
}
