pub mod button;
pub mod flex;
pub mod heading;
pub mod icon;
pub mod layout_box;
pub mod shoji_grid;

use zcss::{CustomProperties, DataAttributes, StyleBlock};

use crate::context::StyleContext;

/// Style output of one component instance.
///
/// Rebuilt from scratch on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleOutput {
    /// Class names, base-value driven.
    pub class_names: Vec<String>,
    /// Inline custom properties (custom-property strategy).
    pub inline: CustomProperties,
    /// Scoped declarations (scoped-declaration strategy).
    pub scoped: StyleBlock,
    /// Marker attributes for companion stylesheet gating.
    pub data_attributes: DataAttributes,
}

impl StyleOutput {
    /// The `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.class_names.join(" ")
    }

    /// Renders the scoped declarations under `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        self.scoped.to_css(selector)
    }
}

/// A styleable component.
pub trait Component {
    /// Component name used in custom properties (`--{NAME}-{prop}-{bp}`).
    const NAME: &'static str;

    /// Computes the style output for this instance.
    fn style(&self, ctx: &StyleContext<'_>) -> StyleOutput;
}
