//! Icon: a square glyph whose pixel size comes from the theme.
//!
//! The `width`/`height` attributes of the rendered SVG cannot vary by width,
//! so they take the base size. Larger breakpoints resize through scoped
//! declarations.

use zcss::{
    DataAttributeOptions, IconSize, Responsive, ResponsiveProps, emit_scoped_optional,
};
use zen_macros::ResponsiveProps;

use crate::component::{Component, StyleOutput};
use crate::context::StyleContext;

#[derive(Debug, Clone, PartialEq, Default, ResponsiveProps)]
pub struct IconProps {
    pub name: String,
    pub size: Option<Responsive<IconSize>>,
}

impl IconProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    pub fn size(mut self, value: impl Into<Responsive<IconSize>>) -> Self {
        self.size = Some(value.into());
        self
    }

    /// Pixel size for the `width`/`height` attributes.
    pub fn pixel_size(&self, ctx: &StyleContext<'_>) -> u32 {
        let size = self
            .size
            .as_ref()
            .map_or(IconSize::Md, |s| s.resolve_base(IconSize::Md));
        ctx.theme.icon_px(size)
    }
}

impl Component for IconProps {
    const NAME: &'static str = "icon";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let theme = ctx.theme;
        let px = |s: &IconSize| format!("{}px", theme.icon_px(*s));

        let mut scoped = emit_scoped_optional("width", self.size.as_ref(), px);
        scoped.merge(emit_scoped_optional("height", self.size.as_ref(), px));

        log::debug!(
            "STYLE: component={} icon={} base_px={}",
            Self::NAME,
            self.name,
            self.pixel_size(ctx)
        );

        StyleOutput {
            class_names: vec![
                theme.class_name(&[Self::NAME]),
                theme.class_name(&[Self::NAME, &self.name]),
            ],
            scoped,
            data_attributes: self.data_attributes(DataAttributeOptions::default()),
            ..Default::default()
        }
    }
}
