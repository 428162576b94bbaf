//! Shoji grid: a CSS grid whose cells draw inset dividers.
//!
//! The grid's gap doubles as the divider thickness. Cells never take the gap
//! as a prop; they read it from the context built by
//! [`ShojiGridProps::child_context`].

use zcss::{
    DataAttributeOptions, GridTemplate, Responsive, ResponsiveProps, Space, StyleBlock,
    emit_scoped_optional,
};
use zen_macros::ResponsiveProps;

use crate::component::{Component, StyleOutput};
use crate::context::StyleContext;
use crate::styles::{InsetShadow, inset_shadow_styles};

#[derive(Debug, Clone, Default, PartialEq, ResponsiveProps)]
pub struct ShojiGridProps {
    pub columns: Option<Responsive<GridTemplate>>,
    pub gap: Option<Responsive<Space>>,
}

impl ShojiGridProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, value: impl Into<Responsive<GridTemplate>>) -> Self {
        self.columns = Some(value.into());
        self
    }

    pub fn gap(mut self, value: impl Into<Responsive<Space>>) -> Self {
        self.gap = Some(value.into());
        self
    }

    /// Context handed to this grid's cells.
    pub fn child_context<'a>(&self, ctx: &StyleContext<'a>) -> StyleContext<'a> {
        ctx.with_gap(self.gap.clone())
    }
}

impl Component for ShojiGridProps {
    const NAME: &'static str = "shoji-grid";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let theme = ctx.theme;

        let mut scoped = StyleBlock::new().with("display", "grid");
        scoped.merge(emit_scoped_optional(
            "grid-template-columns",
            self.columns.as_ref(),
            GridTemplate::to_string,
        ));
        scoped.merge(emit_scoped_optional("gap", self.gap.as_ref(), |s| {
            theme.space_css(s)
        }));

        log::debug!(
            "STYLE: component={} declarations={} media={}",
            Self::NAME,
            scoped.declarations.len(),
            scoped.media_keys().len()
        );

        StyleOutput {
            class_names: vec![theme.class_name(&[Self::NAME])],
            scoped,
            data_attributes: self.data_attributes(DataAttributeOptions::default()),
            ..Default::default()
        }
    }
}

/// One cell of a [`ShojiGridProps`] grid.
#[derive(Debug, Clone, Default, PartialEq, ResponsiveProps)]
pub struct ShojiGridCellProps {
    pub shadow_top: Option<Responsive<bool>>,
    pub shadow_right: Option<Responsive<bool>>,
}

impl ShojiGridCellProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shadow_top(mut self, value: impl Into<Responsive<bool>>) -> Self {
        self.shadow_top = Some(value.into());
        self
    }

    pub fn shadow_right(mut self, value: impl Into<Responsive<bool>>) -> Self {
        self.shadow_right = Some(value.into());
        self
    }
}

impl Component for ShojiGridCellProps {
    const NAME: &'static str = "shoji-grid-cell";

    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput {
        let shadow = InsetShadow {
            top: self.shadow_top.as_ref(),
            right: self.shadow_right.as_ref(),
            gap: ctx.gap.as_ref(),
        };
        if ctx.gap.is_none() && (shadow.top.is_some() || shadow.right.is_some()) {
            log::debug!("ShojiGridCell: no enclosing grid gap, shadows are 0px");
        }

        let scoped = inset_shadow_styles(&shadow, ctx.theme);
        log::debug!(
            "STYLE: component={} declarations={} media={}",
            Self::NAME,
            scoped.declarations.len(),
            scoped.media_keys().len()
        );

        StyleOutput {
            class_names: vec![ctx.theme.class_name(&[Self::NAME])],
            scoped,
            data_attributes: self.data_attributes(DataAttributeOptions::default()),
            ..Default::default()
        }
    }
}
