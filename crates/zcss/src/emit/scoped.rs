//! Scoped-declaration emission (mobile-first media queries).
//!
//! The base declaration is emitted unconditionally using the representative
//! base value. Every explicitly defined breakpoint from `xs` up adds one
//! `@media (min-width: Npx)` block. Browsers apply the base rule and then each
//! matching media rule in document order, so no `var()` fallback chain is
//! needed.

use crate::emit::block::StyleBlock;
use crate::types::{Breakpoint, Responsive};

/// Emits `{ prop: to_css(base) }` plus one media block per explicitly
/// defined breakpoint above `base`.
///
/// Sub-properties derived from one responsive value (for example
/// `padding-left` and `padding-right` from a horizontal padding) are separate
/// calls whose results the caller merges with [`StyleBlock::merge`].
///
/// ```
/// use zcss::{responsive, emit_scoped_declarations};
///
/// let padding = responsive! { base: 8, md: 24 };
/// let block = emit_scoped_declarations("padding", &padding, |px| format!("{px}px"));
/// assert_eq!(block.get("padding"), Some("8px"));
/// let md = block.nested("@media (min-width: 1024px)").unwrap();
/// assert_eq!(md.get("padding"), Some("24px"));
/// ```
pub fn emit_scoped_declarations<T>(
    prop: &str,
    value: &Responsive<T>,
    mut to_css: impl FnMut(&T) -> String,
) -> StyleBlock {
    let mut block = StyleBlock::new();

    let Some(base) = value.base_value() else {
        return block;
    };
    block.declare(prop, to_css(base));

    if let Responsive::PerBreakpoint(map) = value {
        for bp in Breakpoint::MEDIA {
            let (Some(entry), Some(media)) = (map.get(bp), bp.media_query()) else {
                continue;
            };
            block.nest(media, StyleBlock::new().with(prop, to_css(entry)));
        }
    }

    log::trace!(
        "SCOPED: {} -> base + {} media blocks",
        prop,
        block.media_keys().len()
    );
    block
}

/// Emits scoped declarations for an optional prop; `None` emits nothing.
pub fn emit_scoped_optional<T>(
    prop: &str,
    value: Option<&Responsive<T>>,
    to_css: impl FnMut(&T) -> String,
) -> StyleBlock {
    value
        .map(|v| emit_scoped_declarations(prop, v, to_css))
        .unwrap_or_default()
}
