//! The companion stylesheet shipped alongside inline custom properties.

use insta::assert_snapshot;
use zcss::Theme;
use zen::{Component, HeadingProps, component_stylesheet};

#[test]
fn heading_companion_css() {
    assert_snapshot!(HeadingProps::companion().to_css(".zen-heading"), @r"
.zen-heading {
  font-size: var(--heading-size-base);
}
@media (min-width: 480px) {
  .zen-heading[data-has-responsive-size] {
    font-size: var(--heading-size-xs, var(--heading-size-base));
  }
}
@media (min-width: 640px) {
  .zen-heading[data-has-responsive-size] {
    font-size: var(--heading-size-sm, var(--heading-size-xs, var(--heading-size-base)));
  }
}
@media (min-width: 1024px) {
  .zen-heading[data-has-responsive-size] {
    font-size: var(--heading-size-md, var(--heading-size-sm, var(--heading-size-xs, var(--heading-size-base))));
  }
}
@media (min-width: 1280px) {
  .zen-heading[data-has-responsive-size] {
    font-size: var(--heading-size-lg, var(--heading-size-md, var(--heading-size-sm, var(--heading-size-xs, var(--heading-size-base)))));
  }
}
");
}

#[test]
fn stylesheet_covers_flex_and_heading() {
    let css = component_stylesheet(&Theme::default());

    assert!(css.starts_with(
        ".zen-flex {\n  display: flex;\n  gap: var(--flex-gap-base);\n  flex-direction: var(--flex-direction-base, row);\n"
    ));
    assert!(css.contains(".zen-flex[data-has-responsive-justify]"));
    assert!(css.contains(".zen-heading {\n  font-size: var(--heading-size-base);\n}\n"));
    assert_eq!(HeadingProps::NAME, "heading");
}

#[test]
fn stylesheet_uses_class_prefix() {
    let theme = Theme::default().with_class_prefix("acme");
    let css = component_stylesheet(&theme);

    assert!(css.contains(".acme-flex {"));
    assert!(css.contains(".acme-heading[data-has-responsive-size]"));
    assert!(!css.contains(".zen-"));
}
