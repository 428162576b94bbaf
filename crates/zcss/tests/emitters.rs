//! Behavior of the three emitters on responsive prop values.

use zcss::{
    AttrValue, Breakpoint, BreakpointMap, CustomProperties, DataAttributeOptions, Responsive,
    Space, StyleBlock, Theme, attr_entry, emit_custom_properties, emit_data_attributes,
    emit_scoped_declarations, normalize, responsive,
};

fn space_css(space: &Space) -> String {
    Theme::default().space_css(space)
}

// ============================================================================
// Custom properties
// ============================================================================

#[test]
fn simple_value_emits_only_base() {
    let value = Responsive::Simple("8px".to_string());
    let props = emit_custom_properties("flex", "gap", &value);
    assert_eq!(props, CustomProperties::from_iter([("--flex-gap-base", "8px")]));
}

#[test]
fn absent_breakpoints_are_not_filled_in() {
    let value = responsive! { base: "a".to_string(), lg: "b".to_string() };
    let props = emit_custom_properties("box", "padding", &value);

    assert_eq!(props.len(), 2);
    assert_eq!(props.get("--box-padding-base"), Some("a"));
    assert_eq!(props.get("--box-padding-lg"), Some("b"));
    assert!(!props.contains("--box-padding-md"));
}

#[test]
fn custom_properties_follow_breakpoint_order() {
    let value = responsive! { lg: "3".to_string(), xs: "1".to_string(), md: "2".to_string() };
    let props = emit_custom_properties("c", "p", &value);
    let names: Vec<&str> = props.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["--c-p-xs", "--c-p-md", "--c-p-lg"]);
}

#[test]
fn inline_style_rendering() {
    let value = responsive! { base: "8px".to_string(), md: "24px".to_string() };
    let props = emit_custom_properties("box", "padding", &value);
    assert_eq!(
        props.to_inline_style(),
        "--box-padding-base: 8px; --box-padding-md: 24px"
    );
}

// ============================================================================
// Scoped declarations
// ============================================================================

#[test]
fn scoped_uses_correct_thresholds() {
    let value = responsive! { base: 0, xs: 1, sm: 2, md: 3, lg: 4 };
    let block = emit_scoped_declarations("order", &value, |n| n.to_string());

    assert_eq!(block.get("order"), Some("0"));
    assert_eq!(
        block.media_keys(),
        vec![
            "@media (min-width: 480px)",
            "@media (min-width: 640px)",
            "@media (min-width: 1024px)",
            "@media (min-width: 1280px)",
        ]
    );
    let xs = block.nested("@media (min-width: 480px)").unwrap();
    assert_eq!(xs.get("order"), Some("1"));
}

#[test]
fn scoped_without_base_uses_first_defined() {
    let value = responsive! { md: "X", lg: "Y" };
    let block = emit_scoped_declarations("color", &value, |s| s.to_string());

    assert_eq!(block.get("color"), Some("X"));
    assert_eq!(block.media_keys().len(), 2);
}

#[test]
fn scoped_simple_value_has_no_media() {
    let block = emit_scoped_declarations("gap", &Responsive::Simple(Space::Md), space_css);
    assert_eq!(block, StyleBlock::new().with("gap", "16px"));
}

#[test]
fn scoped_empty_map_emits_nothing() {
    let value: Responsive<Space> = Responsive::PerBreakpoint(Default::default());
    assert!(emit_scoped_declarations("gap", &value, space_css).is_empty());
}

#[test]
fn sub_properties_merge_into_one_block() {
    let horizontal = responsive! { base: Space::Sm, md: Space::Lg };
    let mut block = emit_scoped_declarations("padding-left", &horizontal, space_css);
    block.merge(emit_scoped_declarations("padding-right", &horizontal, space_css));

    assert_eq!(block.get("padding-left"), Some("8px"));
    assert_eq!(block.get("padding-right"), Some("8px"));
    let md = block.nested("@media (min-width: 1024px)").unwrap();
    assert_eq!(md.declarations.len(), 2);
}

#[test]
fn merged_sub_properties_keep_media_order() {
    let padding = responsive! { base: Space::None, lg: Space::Xl };
    let padding_left = responsive! { base: Space::None, sm: Space::Md };
    let mut block = emit_scoped_declarations("padding", &padding, space_css);
    block.merge(emit_scoped_declarations("padding-left", &padding_left, space_css));

    assert_eq!(
        block.media_keys(),
        vec!["@media (min-width: 640px)", "@media (min-width: 1280px)"]
    );
    // lg shorthand after the sm longhand
    let css = block.to_css(".box");
    let sm = css.find("padding-left: 16px").unwrap();
    let lg = css.find("padding: 32px").unwrap();
    assert!(sm < lg);
}

// ============================================================================
// Data attributes
// ============================================================================

#[test]
fn empty_per_breakpoint_value_is_not_marked() {
    let visible: Responsive<bool> = Responsive::PerBreakpoint(BreakpointMap::new());
    let props = vec![("visible", attr_entry(Some(&visible)))];

    let attrs = emit_data_attributes(&props, DataAttributeOptions::with_breakpoint_values());
    assert!(attrs.is_empty());
}

#[test]
fn simple_values_never_mark_responsive() {
    let props = vec![
        ("gap", attr_entry(Some(&Responsive::Simple(Space::Md)))),
        ("visible", attr_entry::<bool>(None)),
    ];
    let attrs = emit_data_attributes(&props, DataAttributeOptions::with_breakpoint_values());
    assert!(attrs.is_empty());
}

#[test]
fn responsive_values_are_marked() {
    let gap = responsive! { base: Space::Sm, md: Space::Lg };
    let props = vec![("gap", attr_entry(Some(&gap)))];

    let attrs = emit_data_attributes(&props, DataAttributeOptions::default());
    assert_eq!(attrs.get("data-has-responsive-gap"), Some("true"));
    assert_eq!(attrs.len(), 1);
}

#[test]
fn breakpoint_values_keep_explicit_false() {
    let visible = responsive! { base: false, md: true };
    let props = vec![("isVisible", attr_entry(Some(&visible)))];

    let attrs = emit_data_attributes(&props, DataAttributeOptions::with_breakpoint_values());
    assert_eq!(attrs.get("data-has-responsive-is-visible"), Some("true"));
    assert_eq!(attrs.get("data-is-visible-base"), Some("false"));
    assert_eq!(attrs.get("data-is-visible-md"), Some("true"));
    assert!(!attrs.contains("data-is-visible-sm"));
}

#[test]
fn attr_values_from_mixed_props() {
    let entry = attr_entry(Some(&responsive! { sm: 3u32 })).unwrap();
    assert_eq!(entry.get(Breakpoint::Sm), Some(&AttrValue::Text("3".into())));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn emitters_are_idempotent() {
    let padding = responsive! { base: Space::Sm, md: Space::Lg };
    let css = normalize(Some(&padding), space_css).unwrap();

    assert_eq!(
        emit_custom_properties("box", "padding", &css),
        emit_custom_properties("box", "padding", &css)
    );
    assert_eq!(
        emit_scoped_declarations("padding", &padding, space_css),
        emit_scoped_declarations("padding", &padding, space_css)
    );
    let props = vec![("padding", attr_entry(Some(&padding)))];
    let options = DataAttributeOptions::with_breakpoint_values();
    assert_eq!(
        emit_data_attributes(&props, options),
        emit_data_attributes(&props, options)
    );
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn box_padding_end_to_end() {
    let padding = responsive! { base: Space::Sm, md: Space::Lg };

    let css = normalize(Some(&padding), space_css).unwrap();
    let props = emit_custom_properties("box", "padding", &css);
    assert_eq!(
        props,
        CustomProperties::from_iter([("--box-padding-base", "8px"), ("--box-padding-md", "24px")])
    );

    let block = emit_scoped_declarations("padding", &padding, space_css);
    let expected = StyleBlock::new().with("padding", "8px").with_nested(
        "@media (min-width: 1024px)",
        StyleBlock::new().with("padding", "24px"),
    );
    assert_eq!(block, expected);
}
