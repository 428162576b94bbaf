//! Inset-shadow generator for grid cells.
//!
//! A shoji grid draws its dividers as inset shadows on the cells: `::before`
//! for the top edge and `::after` for the right edge. Whether an edge is drawn
//! and how thick it is can both vary by breakpoint. The thickness is the
//! grid's gap at that breakpoint, which the cell receives from its context.
//!
//! Every breakpoint defined by any of the three inputs is evaluated on its
//! own. Edge flags cascade from smaller breakpoints (an edge is off below its
//! first entry); the gap cascades with the first-defined rule.
//!
//! - edge turns on: full pseudo-element rule
//! - edge stays on: thickness only
//! - edge turns off: `content: none`

use zcss::{Breakpoint, Responsive, Space, StyleBlock, Theme, union_defined};

/// The inputs of one cell's shadow computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsetShadow<'a> {
    pub top: Option<&'a Responsive<bool>>,
    pub right: Option<&'a Responsive<bool>>,
    /// Gap of the enclosing grid.
    pub gap: Option<&'a Responsive<Space>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Right,
}

impl Edge {
    fn selector(self) -> &'static str {
        match self {
            Edge::Top => "&::before",
            Edge::Right => "&::after",
        }
    }

    fn thickness_property(self) -> &'static str {
        match self {
            Edge::Top => "height",
            Edge::Right => "width",
        }
    }

    fn drawn_rule(self, thickness: &str, color: &str) -> StyleBlock {
        let rule = StyleBlock::new()
            .with("content", "\"\"")
            .with("position", "absolute")
            .with("pointer-events", "none")
            .with("background", color);
        match self {
            Edge::Top => rule
                .with("top", "0")
                .with("left", "0")
                .with("right", "0")
                .with("height", thickness),
            Edge::Right => rule
                .with("top", "0")
                .with("bottom", "0")
                .with("right", "0")
                .with("width", thickness),
        }
    }
}

/// Tracks whether an edge is currently drawn while walking breakpoints.
fn edge_rule(
    edge: Edge,
    on: bool,
    drawn: &mut bool,
    thickness: &str,
    color: &str,
) -> Option<StyleBlock> {
    let rule = match (on, *drawn) {
        (true, false) => Some(edge.drawn_rule(thickness, color)),
        (true, true) => Some(StyleBlock::new().with(edge.thickness_property(), thickness)),
        (false, true) => Some(StyleBlock::new().with("content", "none")),
        (false, false) => None,
    };
    *drawn = on;
    rule
}

fn edge_on(value: Option<&Responsive<bool>>, bp: Breakpoint) -> bool {
    value.and_then(|v| v.value_at(bp)).copied().unwrap_or(false)
}

pub fn inset_shadow_styles(shadow: &InsetShadow<'_>, theme: &Theme) -> StyleBlock {
    let mut block = StyleBlock::new();
    if shadow.top.is_none() && shadow.right.is_none() {
        return block;
    }
    block.declare("position", "relative");

    let breakpoints = union_defined([shadow.top, shadow.right])
        | shadow.gap.map(Responsive::defined).unwrap_or_default();

    let mut top_drawn = false;
    let mut right_drawn = false;

    for bp in breakpoints.breakpoints() {
        let gap = shadow
            .gap
            .map_or(Space::None, |g| g.resolve_at(bp, Space::None));
        let thickness = theme.space_css(&gap);

        let mut rules = StyleBlock::new();
        let edges = [
            (Edge::Top, edge_on(shadow.top, bp), &mut top_drawn),
            (Edge::Right, edge_on(shadow.right, bp), &mut right_drawn),
        ];
        for (edge, on, drawn) in edges {
            if let Some(rule) = edge_rule(edge, on, drawn, &thickness, &theme.shadow_color) {
                rules.nest(edge.selector(), rule);
            }
        }

        if rules.is_empty() {
            continue;
        }
        match bp.media_query() {
            None => block.merge(rules),
            Some(media) => block.nest(media, rules),
        }
    }

    log::trace!(
        "SHADOW: {} breakpoints evaluated -> {} media blocks",
        breakpoints.breakpoints().count(),
        block.media_keys().len()
    );
    block
}
