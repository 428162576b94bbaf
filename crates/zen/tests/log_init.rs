use std::fs;

use zcss::{Space, Theme};
use zen::log_init::init_logger;
use zen::{
    BoxProps, ButtonProps, Component, FlexProps, HeadingProps, IconProps, ShojiGridCellProps,
    ShojiGridProps, StyleContext,
};

#[test]
fn logger_appends_to_file() {
    let path = std::env::temp_dir().join(format!("zen-log-{}.log", std::process::id()));
    let _ = fs::remove_file(&path);

    init_logger(&path).unwrap();
    assert!(init_logger(&path).is_err());

    let theme = Theme::default();
    let ctx = StyleContext::new(&theme);
    let grid = ShojiGridProps::new().gap(Space::Sm);
    BoxProps::new().padding(Space::Md).style(&ctx);
    FlexProps::new().gap(Space::Sm).style(&ctx);
    HeadingProps::new(2).style(&ctx);
    IconProps::new("search").style(&ctx);
    ButtonProps::new().style(&ctx);
    grid.style(&ctx);
    ShojiGridCellProps::new()
        .shadow_top(true)
        .style(&grid.child_context(&ctx));

    let contents = fs::read_to_string(&path).unwrap();
    for name in ["box", "flex", "heading", "icon", "button", "shoji-grid", "shoji-grid-cell"] {
        let line = format!("[DEBUG] STYLE: component={name} ");
        assert!(contents.contains(&line), "missing log line for {name}");
    }
    let _ = fs::remove_file(&path);
}
