//! Companion stylesheet rules for the custom-property strategy.
//!
//! Components using custom properties only set `--c-p-<bp>` inline for the
//! breakpoints they define. The companion rules read those properties inside
//! media queries through `var()` fallback chains, so an undefined breakpoint
//! falls back to the nearest smaller one:
//!
//! ```css
//! .flex { gap: var(--flex-gap-base); }
//! @media (min-width: 1024px) {
//!   .flex[data-has-responsive-gap] {
//!     gap: var(--flex-gap-md, var(--flex-gap-sm, var(--flex-gap-xs, var(--flex-gap-base))));
//!   }
//! }
//! ```
//!
//! Media rules are gated on `data-has-responsive-<prop>`, so they only apply
//! to instances that set the prop per breakpoint.

use crate::emit::block::StyleBlock;
use crate::emit::custom_properties::custom_property_name;
use crate::emit::data_attributes::has_responsive_attribute;
use crate::types::Breakpoint;

/// The `var()` chain reading `bp`, then every smaller breakpoint down to
/// `base`.
pub fn var_fallback_chain(component: &str, prop: &str, bp: Breakpoint) -> String {
    Breakpoint::ALL[..=bp.index()]
        .iter()
        .fold(String::new(), |inner, smaller| {
            let name = custom_property_name(component, prop, *smaller);
            if inner.is_empty() {
                format!("var({name})")
            } else {
                format!("var({name}, {inner})")
            }
        })
}

/// Builds the companion rules for one prop: the base rule, plus one gated
/// media rule per breakpoint above `base`.
pub fn companion_rules(component: &str, prop: &str, css_property: &str) -> StyleBlock {
    let mut block = StyleBlock::new().with(
        css_property,
        var_fallback_chain(component, prop, Breakpoint::Base),
    );

    let gate = format!("&[{}]", has_responsive_attribute(prop));
    for bp in Breakpoint::MEDIA {
        let Some(media) = bp.media_query() else {
            continue;
        };
        let rule = StyleBlock::new().with(css_property, var_fallback_chain(component, prop, bp));
        block.nest(media, StyleBlock::new().with_nested(gate.as_str(), rule));
    }

    block
}
