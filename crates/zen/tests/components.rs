//! Style output of each component.

use zcss::{FontSize, GridTemplate, IconSize, Space, Theme, responsive};
use zen::{
    BoxProps, Component, FlexDirection, FlexProps, HeadingProps, IconProps, ShojiGridCellProps,
    ShojiGridProps, StyleContext,
};

#[test]
fn box_padding_per_breakpoint() {
    let theme = Theme::default();
    let props = BoxProps::new().padding(responsive! { base: Space::Sm, md: Space::Lg });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(style.class_names, vec!["zen-box"]);
    assert_eq!(style.scoped.get("padding"), Some("8px"));
    let md = style.scoped.nested("@media (min-width: 1024px)").unwrap();
    assert_eq!(md.get("padding"), Some("24px"));
    assert!(style.inline.is_empty());
    assert_eq!(
        style.data_attributes.get("data-has-responsive-padding"),
        Some("true")
    );
}

#[test]
fn box_padding_wins_over_axis_padding() {
    let theme = Theme::default();
    let props = BoxProps::new()
        .padding(Space::Md)
        .padding_vertical(responsive! { base: Space::Xs, lg: Space::Xl });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(style.scoped.get("padding"), Some("16px"));
    assert_eq!(style.scoped.get("padding-top"), None);
    assert!(style.scoped.media_keys().is_empty());
    assert!(style.data_attributes.is_empty());
}

#[test]
fn box_axis_padding_media_blocks_ascend() {
    let theme = Theme::default();
    let props = BoxProps::new()
        .padding_horizontal(responsive! { base: Space::Sm, lg: Space::Xl })
        .padding_vertical(responsive! { base: Space::Sm, sm: Space::Md });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(
        style.scoped.media_keys(),
        vec!["@media (min-width: 640px)", "@media (min-width: 1280px)"]
    );
}

#[test]
fn box_hidden_from_md() {
    let theme = Theme::default();
    let props = BoxProps::new().visible(responsive! { md: false });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(style.scoped.get("display"), None);
    let md = style.scoped.nested("@media (min-width: 1024px)").unwrap();
    assert_eq!(md.get("display"), Some("none"));
    assert_eq!(
        style.data_attributes.get("data-has-responsive-visible"),
        Some("true")
    );
}

#[test]
fn flex_sets_sparse_custom_properties() {
    let theme = Theme::default();
    let props = FlexProps::new()
        .gap(responsive! { base: Space::Sm, md: Space::Lg })
        .direction(FlexDirection::Column);
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(
        style.inline.to_inline_style(),
        "--flex-gap-base: 8px; --flex-gap-md: 24px; --flex-direction-base: column"
    );
    assert_eq!(
        style.data_attributes.get("data-has-responsive-gap"),
        Some("true")
    );
    assert!(!style.data_attributes.contains("data-has-responsive-direction"));
}

#[test]
fn flex_fills_missing_base() {
    let theme = Theme::default();
    let props = FlexProps::new().gap(responsive! { md: Space::Lg });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(style.inline.get("--flex-gap-base"), Some("24px"));
    assert_eq!(style.inline.get("--flex-gap-md"), Some("24px"));
    assert_eq!(style.inline.len(), 2);
}

#[test]
fn flex_visibility_is_not_a_data_attribute() {
    let theme = Theme::default();
    let props = FlexProps::new().visible(responsive! { base: false, sm: true });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(style.scoped.get("display"), Some("none"));
    assert!(style.data_attributes.is_empty());
}

#[test]
fn heading_size_follows_level() {
    let theme = Theme::default();
    let style = HeadingProps::new(1).style(&StyleContext::new(&theme));

    assert_eq!(style.class_attr(), "zen-heading zen-heading-xxl");
    assert_eq!(style.inline.get("--heading-size-base"), Some("2rem"));
    assert!(style.data_attributes.is_empty());
}

#[test]
fn heading_responsive_size() {
    let theme = Theme::default();
    let props = HeadingProps::new(3).size(responsive! { base: FontSize::Md, lg: FontSize::Xl });
    let style = props.style(&StyleContext::new(&theme));

    assert_eq!(props.tag(), "h3");
    assert_eq!(style.class_attr(), "zen-heading zen-heading-md");
    assert_eq!(
        style.inline.to_inline_style(),
        "--heading-size-base: 1rem; --heading-size-lg: 1.5rem"
    );
    assert_eq!(
        style.data_attributes.get("data-has-responsive-size"),
        Some("true")
    );
}

#[test]
fn icon_pixel_size_uses_base() {
    let theme = Theme::default();
    let ctx = StyleContext::new(&theme);

    assert_eq!(IconProps::new("search").pixel_size(&ctx), 20);

    let props = IconProps::new("search").size(responsive! { lg: IconSize::Lg });
    assert_eq!(props.pixel_size(&ctx), 24);

    let props = IconProps::new("search").size(responsive! { base: IconSize::Sm, lg: IconSize::Lg });
    assert_eq!(props.pixel_size(&ctx), 16);

    let style = props.style(&ctx);
    assert_eq!(style.class_attr(), "zen-icon zen-icon-search");
    assert_eq!(style.scoped.get("width"), Some("16px"));
    let lg = style.scoped.nested("@media (min-width: 1280px)").unwrap();
    assert_eq!(lg.get("height"), Some("24px"));
}

#[test]
fn grid_cell_outside_grid_has_zero_thickness() {
    let theme = Theme::default();
    let cell = ShojiGridCellProps::new().shadow_right(true);
    let style = cell.style(&StyleContext::new(&theme));

    assert_eq!(
        style.scoped.nested("&::after").unwrap().get("width"),
        Some("0px")
    );
}

#[test]
fn grid_parses_template_strings() {
    let theme = Theme::default();
    let columns: GridTemplate = "200px repeat(2, 1fr)".parse().unwrap();
    let style = ShojiGridProps::new()
        .columns(columns)
        .style(&StyleContext::new(&theme));

    assert_eq!(
        style.scoped.get("grid-template-columns"),
        Some("200px repeat(2, 1fr)")
    );
    assert_eq!(style.scoped.get("gap"), None);
}
