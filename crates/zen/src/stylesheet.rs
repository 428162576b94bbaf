//! Companion stylesheet for the custom-property components.
//!
//! Inline custom properties do nothing on their own; this sheet holds the
//! rules that read them. Ship it once per page.

use zcss::Theme;

use crate::component::Component;
use crate::component::flex::FlexProps;
use crate::component::heading::HeadingProps;

/// CSS text of every companion rule, selected by the theme's class names.
pub fn component_stylesheet(theme: &Theme) -> String {
    let sheets = [
        (theme.class_name(&[FlexProps::NAME]), FlexProps::companion()),
        (
            theme.class_name(&[HeadingProps::NAME]),
            HeadingProps::companion(),
        ),
    ];

    let mut css = String::new();
    for (class, block) in sheets {
        css.push_str(&block.to_css(&format!(".{class}")));
    }
    log::debug!("STYLESHEET: {} bytes for theme {}", css.len(), theme.name);
    css
}
