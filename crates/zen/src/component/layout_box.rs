//! Box: the padding container.
//!
//! Uses the scoped-declaration strategy. An explicit `padding` takes
//! precedence over `padding_horizontal` / `padding_vertical`: when it is set,
//! the other two are dropped before anything is emitted, so the engine never
//! sees competing values for the same CSS property.

use zcss::{
    DataAttributeOptions, Responsive, ResponsiveProps, Space, StyleBlock, emit_scoped_optional,
};
use zen_macros::ResponsiveProps;

use crate::component::{Component, StyleOutput};
use crate::context::StyleContext;
use crate::styles::visible_styles;

#[derive(Debug, Clone, Default, PartialEq, ResponsiveProps)]
pub struct BoxProps {
    pub padding: Option<Responsive<Space>>,
    pub padding_horizontal: Option<Responsive<Space>>,
    pub padding_vertical: Option<Responsive<Space>>,
    pub visible: Option<Responsive<bool>>,
}

impl BoxProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, value: impl Into<Responsive<Space>>) -> Self {
        self.padding = Some(value.into());
        self
    }

    pub fn padding_horizontal(mut self, value: impl Into<Responsive<Space>>) -> Self {
        self.padding_horizontal = Some(value.into());
        self
    }

    pub fn padding_vertical(mut self, value: impl Into<Responsive<Space>>) -> Self {
        self.padding_vertical = Some(value.into());
        self
    }

    pub fn visible(mut self, value: impl Into<Responsive<bool>>) -> Self {
        self.visible = Some(value.into());
        self
    }

    /// The props after `padding` precedence is applied.
    pub fn effective(&self) -> BoxProps {
        if self.padding.is_none() {
            return self.clone();
        }
        if self.padding_horizontal.is_some() || self.padding_vertical.is_some() {
            log::debug!("Box: padding overrides padding_horizontal/padding_vertical");
        }
        BoxProps {
            padding_horizontal: None,
            padding_vertical: None,
            ..self.clone()
        }
    }
}

impl Component for BoxProps {
    const NAME: &'static str = "box";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let theme = ctx.theme;
        let props = self.effective();
        let space = |s: &Space| theme.space_css(s);

        let mut scoped = StyleBlock::new();
        scoped.merge(emit_scoped_optional("padding", props.padding.as_ref(), space));
        for side in ["padding-left", "padding-right"] {
            scoped.merge(emit_scoped_optional(
                side,
                props.padding_horizontal.as_ref(),
                space,
            ));
        }
        for side in ["padding-top", "padding-bottom"] {
            scoped.merge(emit_scoped_optional(
                side,
                props.padding_vertical.as_ref(),
                space,
            ));
        }
        if let Some(visible) = &props.visible {
            scoped.merge(visible_styles(visible));
        }

        log::debug!(
            "STYLE: component={} declarations={} media={}",
            Self::NAME,
            scoped.declarations.len(),
            scoped.media_keys().len()
        );

        StyleOutput {
            class_names: vec![theme.class_name(&[Self::NAME])],
            scoped,
            data_attributes: props.data_attributes(DataAttributeOptions::default()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcss::{Theme, responsive};

    #[test]
    fn padding_replaces_axis_padding() {
        let props = BoxProps::new()
            .padding(Space::Md)
            .padding_horizontal(Space::Xl);
        let effective = props.effective();
        assert_eq!(effective.padding_horizontal, None);
        assert_eq!(effective.padding, Some(Responsive::Simple(Space::Md)));
    }

    #[test]
    fn horizontal_padding_sets_both_sides() {
        let theme = Theme::default();
        let props = BoxProps::new().padding_horizontal(responsive! { base: Space::Sm, md: Space::Lg });
        let style = props.style(&StyleContext::new(&theme));

        assert_eq!(style.scoped.get("padding-left"), Some("8px"));
        assert_eq!(style.scoped.get("padding-right"), Some("8px"));
        let md = style.scoped.nested("@media (min-width: 1024px)").unwrap();
        assert_eq!(md.get("padding-left"), Some("24px"));
        assert_eq!(md.get("padding-right"), Some("24px"));
        assert_eq!(
            style.data_attributes.get("data-has-responsive-padding-horizontal"),
            Some("true")
        );
    }
}
