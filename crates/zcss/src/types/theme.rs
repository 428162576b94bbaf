//! Theme configuration: the token-to-CSS tables behind every `to_css`.
//!
//! A theme answers "what CSS does `sm` mean for spacing?" and the like.
//! Components never hardcode pixel values; they look tokens up here.
//!
//! ## Default scales
//!
//! | Space  | CSS    | Font size | CSS       | Icon | px |
//! |--------|--------|-----------|-----------|------|----|
//! | `none` | `0px`  | `xs`      | `0.75rem` | `sm` | 16 |
//! | `xs`   | `4px`  | `sm`      | `0.875rem`| `md` | 20 |
//! | `sm`   | `8px`  | `md`      | `1rem`    | `lg` | 24 |
//! | `md`   | `16px` | `lg`      | `1.25rem` |      |    |
//! | `lg`   | `24px` | `xl`      | `1.5rem`  |      |    |
//! | `xl`   | `32px` | `xxl`     | `2rem`    |      |    |

use crate::error::Result;
use crate::parser::parse_length_value;
use crate::types::geometry::Length;
use crate::types::tokens::{FontSize, IconSize, Space};

/// Design-token configuration shared by all components.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name, informational only.
    pub name: String,
    /// Prefix for generated class names (`zen` → `zen-heading-lg`).
    pub class_prefix: String,
    /// Color of grid-cell inset shadows.
    pub shadow_color: String,
    space: [Length; 6],
    font_sizes: [Length; 6],
    icon_sizes: [u32; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("zen")
    }
}

impl Theme {
    /// Creates a theme with the default scales.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_prefix: "zen".to_string(),
            shadow_color: "rgba(0, 0, 0, 0.12)".to_string(),
            space: [
                Length::ZERO,
                Length::px(4.0),
                Length::px(8.0),
                Length::px(16.0),
                Length::px(24.0),
                Length::px(32.0),
            ],
            font_sizes: [
                Length::rem(0.75),
                Length::rem(0.875),
                Length::rem(1.0),
                Length::rem(1.25),
                Length::rem(1.5),
                Length::rem(2.0),
            ],
            icon_sizes: [16, 20, 24],
        }
    }

    /// Builder method to override one spacing step.
    pub fn with_space(mut self, token: Space, value: Length) -> Self {
        self.space[token.index()] = value;
        self
    }

    /// Like [`Theme::with_space`], parsing `value` as a CSS length.
    pub fn with_space_str(self, token: Space, value: &str) -> Result<Self> {
        let length = parse_length_value(value)?;
        Ok(self.with_space(token, length))
    }

    /// Builder method to override one heading size.
    pub fn with_font_size(mut self, token: FontSize, value: Length) -> Self {
        self.font_sizes[token.index()] = value;
        self
    }

    /// Like [`Theme::with_font_size`], parsing `value` as a CSS length.
    pub fn with_font_size_str(self, token: FontSize, value: &str) -> Result<Self> {
        let length = parse_length_value(value)?;
        Ok(self.with_font_size(token, length))
    }

    /// Builder method to override one icon size.
    pub fn with_icon_size(mut self, token: IconSize, px: u32) -> Self {
        self.icon_sizes[token.index()] = px;
        self
    }

    /// Builder method to set the inset-shadow color.
    pub fn with_shadow_color(mut self, color: impl Into<String>) -> Self {
        self.shadow_color = color.into();
        self
    }

    /// Builder method to set the class-name prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn space(&self, token: Space) -> Length {
        self.space[token.index()]
    }

    /// The `to_css` conversion for spacing tokens.
    pub fn space_css(&self, token: &Space) -> String {
        self.space(*token).to_string()
    }

    pub fn font_size(&self, token: FontSize) -> Length {
        self.font_sizes[token.index()]
    }

    /// The `to_css` conversion for heading sizes.
    pub fn font_size_css(&self, token: &FontSize) -> String {
        self.font_size(*token).to_string()
    }

    pub fn icon_px(&self, token: IconSize) -> u32 {
        self.icon_sizes[token.index()]
    }

    /// Builds a prefixed class name: `class_name(&["heading", "lg"])` →
    /// `zen-heading-lg`.
    pub fn class_name(&self, parts: &[&str]) -> String {
        let mut name = self.class_prefix.clone();
        for part in parts {
            name.push('-');
            name.push_str(part);
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spacing_scale() {
        let theme = Theme::default();
        assert_eq!(theme.space_css(&Space::Sm), "8px");
        assert_eq!(theme.space_css(&Space::Md), "16px");
        assert_eq!(theme.space_css(&Space::Lg), "24px");
        assert_eq!(theme.space_css(&Space::None), "0px");
    }

    #[test]
    fn overrides_parse_lengths() {
        let theme = Theme::default()
            .with_space_str(Space::Sm, "0.5rem")
            .unwrap();
        assert_eq!(theme.space_css(&Space::Sm), "0.5rem");
        assert!(Theme::default().with_space_str(Space::Sm, "wide").is_err());
    }

    #[test]
    fn class_names_use_prefix() {
        let theme = Theme::default().with_class_prefix("z");
        assert_eq!(theme.class_name(&["heading", "lg"]), "z-heading-lg");
    }
}
