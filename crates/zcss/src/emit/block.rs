//! Nested style blocks and their flattening into CSS text.
//!
//! A [`StyleBlock`] is a declaration list plus nested blocks keyed either by
//! an `@media …` guard or by a selector. Selector keys use `&` for the parent
//! selector, SCSS style:
//!
//! ```css
//! padding: 8px;
//! &::after { width: 8px; }
//! @media (min-width: 1024px) {
//!     padding: 24px;
//!     &::after { width: 16px; }
//! }
//! ```
//!
//! [`StyleBlock::to_css`] flattens this under a concrete selector:
//!
//! ```css
//! .cell { padding: 8px; }
//! .cell::after { width: 8px; }
//! @media (min-width: 1024px) {
//!     .cell { padding: 24px; }
//!     .cell::after { width: 16px; }
//! }
//! ```
//!
//! ## Flattening Rules
//!
//! - `&` is replaced by the parent selector
//! - Nested selectors without `&` imply a descendant combinator
//! - `@media` keys wrap every rule produced beneath them
//! - Blocks without declarations produce no rule

use std::fmt::Write;

use crate::parser::media_min_width;

/// A declaration block with nested `@media` and selector blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleBlock {
    pub declarations: Vec<(String, String)>,
    pub nested: Vec<(String, StyleBlock)>,
}

impl StyleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a declaration. A later value for the same property replaces the
    /// earlier one in place.
    pub fn declare(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Builder form of [`StyleBlock::declare`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declare(property, value);
        self
    }

    /// Builder form of [`StyleBlock::nest`].
    pub fn with_nested(mut self, key: impl Into<String>, block: StyleBlock) -> Self {
        self.nest(key, block);
        self
    }

    /// The nested block under `key`, created empty when missing.
    ///
    /// New keys keep the mobile-first order: selector blocks sit before every
    /// `@media` block, and `min-width` guards ascend by threshold.
    pub fn nested_mut(&mut self, key: &str) -> &mut StyleBlock {
        let idx = match self.nested.iter().position(|(k, _)| k == key) {
            Some(idx) => idx,
            None => {
                let idx = insertion_index(&self.nested, key);
                self.nested.insert(idx, (key.to_string(), StyleBlock::new()));
                idx
            }
        };
        &mut self.nested[idx].1
    }

    /// Merges `block` into the nested block under `key`.
    pub fn nest(&mut self, key: impl Into<String>, block: StyleBlock) {
        let key = key.into();
        self.nested_mut(&key).merge(block);
    }

    /// Merges another block into this one. Declarations of `other` win, and
    /// nested blocks with equal keys merge recursively.
    pub fn merge(&mut self, other: StyleBlock) {
        for (property, value) in other.declarations {
            self.declare(property, value);
        }
        for (key, block) in other.nested {
            self.nest(key, block);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn nested(&self, key: &str) -> Option<&StyleBlock> {
        self.nested.iter().find(|(k, _)| k == key).map(|(_, b)| b)
    }

    /// Keys of the nested `@media` blocks, in order.
    pub fn media_keys(&self) -> Vec<&str> {
        self.nested
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| k.starts_with("@media"))
            .collect()
    }

    /// True when neither this block nor any nested block declares anything.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.nested.iter().all(|(_, b)| b.is_empty())
    }

    /// Flattens the block under `selector` and renders CSS text.
    pub fn to_css(&self, selector: &str) -> String {
        let mut rules = Vec::new();
        flatten_block(self, selector, None, &mut rules);
        render_rules(&rules)
    }
}

/// Where a new nested `key` goes among `nested`.
fn insertion_index(nested: &[(String, StyleBlock)], key: &str) -> usize {
    let is_media = |k: &str| k.starts_with('@');

    if !is_media(key) {
        return nested
            .iter()
            .position(|(k, _)| is_media(k.as_str()))
            .unwrap_or(nested.len());
    }

    // Guards without a min-width keep insertion order after the others
    let Some(width) = media_min_width(key) else {
        return nested.len();
    };
    nested
        .iter()
        .position(|(k, _)| {
            is_media(k.as_str()) && media_min_width(k).is_none_or(|other| other > width)
        })
        .unwrap_or(nested.len())
}

/// A flat rule produced by [`flatten_block`].
#[derive(Debug)]
struct FlatRule<'a> {
    media: Option<&'a str>,
    selector: String,
    declarations: &'a [(String, String)],
}

fn flatten_block<'a>(
    block: &'a StyleBlock,
    selector: &str,
    media: Option<&'a str>,
    output: &mut Vec<FlatRule<'a>>,
) {
    // 1. Local declarations first
    if !block.declarations.is_empty() {
        output.push(FlatRule {
            media,
            selector: selector.to_string(),
            declarations: &block.declarations,
        });
    }

    // 2. Lift nested blocks
    for (key, nested) in &block.nested {
        if key.starts_with('@') {
            flatten_block(nested, selector, Some(key.as_str()), output);
        } else {
            let combined = combine_selector(selector, key);
            flatten_block(nested, &combined, media, output);
        }
    }
}

fn combine_selector(parent: &str, child: &str) -> String {
    if child.contains('&') {
        child.replace('&', parent)
    } else {
        format!("{parent} {child}")
    }
}

fn render_rules(rules: &[FlatRule<'_>]) -> String {
    let mut out = String::new();
    let mut idx = 0;

    while idx < rules.len() {
        match rules[idx].media {
            None => {
                render_rule(&mut out, &rules[idx], "");
                idx += 1;
            }
            Some(media) => {
                // Consecutive rules under the same guard share one block
                let _ = writeln!(out, "{media} {{");
                while idx < rules.len() && rules[idx].media == Some(media) {
                    render_rule(&mut out, &rules[idx], "  ");
                    idx += 1;
                }
                out.push_str("}\n");
            }
        }
    }

    out
}

fn render_rule(out: &mut String, rule: &FlatRule<'_>, indent: &str) {
    let _ = writeln!(out, "{indent}{} {{", rule.selector);
    for (property, value) in rule.declarations {
        let _ = writeln!(out, "{indent}  {property}: {value};");
    }
    let _ = writeln!(out, "{indent}}}");
}
