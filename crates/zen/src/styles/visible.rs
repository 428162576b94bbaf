//! Visibility generator.
//!
//! Elements are visible unless told otherwise. Walking the explicit entries
//! in ascending order, a switch to hidden emits `display: none` and a switch
//! back to shown emits `display: revert`, so the element regains whatever
//! display its own component class assigns. Entries that repeat the current
//! state emit nothing.

use zcss::{Responsive, StyleBlock};

pub fn visible_styles(visible: &Responsive<bool>) -> StyleBlock {
    let mut block = StyleBlock::new();
    let mut shown = true;

    for (bp, &entry) in visible.entries() {
        if entry == shown {
            continue;
        }
        shown = entry;

        let display = if shown { "revert" } else { "none" };
        match bp.media_query() {
            None => block.declare("display", display),
            Some(media) => block.nest(media, StyleBlock::new().with("display", display)),
        }
    }

    log::trace!(
        "VISIBLE: {} explicit entries -> {} media blocks",
        visible.entries().len(),
        block.media_keys().len()
    );
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcss::responsive;

    #[test]
    fn simple_true_emits_nothing() {
        assert!(visible_styles(&Responsive::Simple(true)).is_empty());
    }

    #[test]
    fn simple_false_hides_everywhere() {
        let block = visible_styles(&Responsive::Simple(false));
        assert_eq!(block, StyleBlock::new().with("display", "none"));
    }

    #[test]
    fn shown_at_larger_breakpoint_reverts() {
        let block = visible_styles(&responsive! { base: false, md: true });
        assert_eq!(block.get("display"), Some("none"));
        let md = block.nested("@media (min-width: 1024px)").unwrap();
        assert_eq!(md.get("display"), Some("revert"));
    }

    #[test]
    fn hidden_from_breakpoint_up() {
        let block = visible_styles(&responsive! { sm: false });
        assert_eq!(block.get("display"), None);
        let sm = block.nested("@media (min-width: 640px)").unwrap();
        assert_eq!(sm.get("display"), Some("none"));
    }

    #[test]
    fn repeated_state_is_skipped() {
        let block = visible_styles(&responsive! { base: false, xs: false, lg: true });
        assert_eq!(block.media_keys(), vec!["@media (min-width: 1280px)"]);
    }
}
