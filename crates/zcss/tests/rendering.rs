//! CSS text produced by flattening style blocks.

use insta::assert_snapshot;
use zcss::{StyleBlock, companion_rules, emit_scoped_declarations, responsive};

#[test]
fn scoped_block_renders_mobile_first() {
    let padding = responsive! { base: "8px", md: "24px" };
    let css = emit_scoped_declarations("padding", &padding, |s| s.to_string()).to_css(".box");

    assert_snapshot!(css, @r"
.box {
  padding: 8px;
}
@media (min-width: 1024px) {
  .box {
    padding: 24px;
  }
}
");
}

#[test]
fn pseudo_elements_inside_media() {
    let block = StyleBlock::new()
        .with("position", "relative")
        .with_nested("&::after", StyleBlock::new().with("width", "8px"))
        .with_nested(
            "@media (min-width: 640px)",
            StyleBlock::new().with_nested("&::after", StyleBlock::new().with("width", "16px")),
        );

    assert_snapshot!(block.to_css(".cell"), @r"
.cell {
  position: relative;
}
.cell::after {
  width: 8px;
}
@media (min-width: 640px) {
  .cell::after {
    width: 16px;
  }
}
");
}

#[test]
fn companion_rules_gate_on_marker_attribute() {
    let css = companion_rules("flex", "gap", "gap").to_css(".zen-flex");

    assert!(css.starts_with(".zen-flex {\n  gap: var(--flex-gap-base);\n}\n"));
    assert!(css.contains(
        "@media (min-width: 480px) {\n  .zen-flex[data-has-responsive-gap] {\n    gap: var(--flex-gap-xs, var(--flex-gap-base));\n  }\n}\n"
    ));
    assert_eq!(css.matches("@media").count(), 4);
}
