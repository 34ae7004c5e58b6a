//! End-to-end flows through the public API: theme → table → active view →
//! merged component styles.

use std::sync::Arc;

use indexmap::IndexMap;
use pretty_assertions::assert_eq;

use stylemap::{
    build_style_table, elevation_shadow, resolve, select_platform_shadow, shift_color,
    BreakpointPolicy, Color, Environment, Platform, ScreenSize, StyleEngine, StyleValue, Theme,
};

/// A small theme exercising the responsive pipeline without the full
/// default catalog.
fn small_theme() -> Theme {
    let mut theme = Theme::default();
    theme.spacers = IndexMap::from([
        ("0".to_string(), StyleValue::Number(0.0)),
        ("1".to_string(), StyleValue::Number(4.0)),
        ("2".to_string(), StyleValue::Number(8.0)),
        ("3".to_string(), StyleValue::Number(16.0)),
    ]);
    theme.breakpoints = IndexMap::from([
        ("md".to_string(), 768.0),
        ("lg".to_string(), 992.0),
    ]);
    theme
}

#[test]
fn responsive_padding_at_800_wide() {
    let theme = small_theme();
    let table = build_style_table(&theme, 12, &Environment::web(false));
    let active = resolve(
        &table,
        800.0,
        &theme.breakpoints,
        BreakpointPolicy::ViewportThreshold,
    );

    assert_eq!(
        active.get("p-3").unwrap().get("padding"),
        Some(&StyleValue::Number(16.0))
    );
    assert!(active.contains("p-md-3"));
    assert!(!active.contains("p-lg-3"));
}

#[test]
fn twelve_column_grid_shape() {
    let table = build_style_table(&Theme::default(), 12, &Environment::web(false));
    let col6 = &table.get("col-6").unwrap().style;

    let props: Vec<_> = col6.iter().collect();
    assert_eq!(
        props,
        vec![
            ("display", &StyleValue::Literal("flex")),
            ("flexGrow", &StyleValue::Number(0.0)),
            ("flexShrink", &StyleValue::Number(0.0)),
            ("flexBasis", &StyleValue::Auto),
            ("width", &StyleValue::Percent(50.0)),
        ]
    );
}

#[test]
fn server_render_includes_every_variant_at_zero_width() {
    let mut theme = Theme::default();
    theme.breakpoints = IndexMap::from([("sm".to_string(), 576.0)]);
    let env = Environment::web(false).with_server_render(true);
    let engine = StyleEngine::new(Arc::new(theme), env);

    let active = engine.styles_for_width(0.0);
    assert!(active.contains("d-none"));
    assert!(active.contains("d-sm-none"));
}

#[test]
fn shift_color_zero_amount_is_identity() {
    let teal = Color::parse_hex("#20c997").unwrap();
    assert_eq!(shift_color(teal, 0.0), teal);
    assert_ne!(shift_color(teal, 0.2), teal);
}

#[test]
fn engine_resize_flow_with_class_merge() {
    let theme = Arc::new(Theme::default());
    let engine = StyleEngine::new(theme.clone(), Environment::web(false));

    // Phone-sized viewport: only the base variant of each utility applies.
    let phone = engine.styles_for_width(390.0);
    let merged = phone.resolve_classes(&["d-none", "d-md-flex", "p-3"]);
    assert_eq!(merged.get("display"), Some(&StyleValue::Literal("none")));
    assert_eq!(merged.get("padding"), Some(&StyleValue::Number(16.0)));

    // Desktop: the md variant is active and, merged later, wins.
    let desktop = engine.styles_for_width(1024.0);
    let merged = desktop.resolve_classes(&["d-none", "d-md-flex", "p-3"]);
    assert_eq!(merged.get("display"), Some(&StyleValue::Literal("flex")));
}

#[test]
fn theme_swap_changes_generated_values() {
    let mut engine = StyleEngine::new(Arc::new(Theme::default()), Environment::web(false));
    let before = engine
        .table()
        .get("p-1")
        .unwrap()
        .style
        .get("padding")
        .cloned();
    assert_eq!(before, Some(StyleValue::Number(4.0)));

    let mut custom = Theme::default();
    custom
        .spacers
        .insert("1".to_string(), StyleValue::Number(6.0));
    engine.set_theme(Arc::new(custom));
    assert_eq!(
        engine.table().get("p-1").unwrap().style.get("padding"),
        Some(&StyleValue::Number(6.0))
    );
}

#[test]
fn native_table_resolves_viewport_units_and_drops_web_only() {
    let env = Environment::native(Platform::Android, ScreenSize::new(400.0, 800.0));
    let table = build_style_table(&Theme::default(), 12, &env);

    assert_eq!(
        table.get("vh-50").unwrap().style.get("height"),
        Some(&StyleValue::Number(400.0))
    );
    assert!(table.get("d-table").is_none());
    assert!(table.get("fixed-top").is_none());
}

#[test]
fn shadow_pipeline_across_platforms() {
    let spec = elevation_shadow(12.0);

    let web = select_platform_shadow(&spec, Platform::Web);
    assert_eq!(
        web.get("boxShadow"),
        Some(&StyleValue::Str("0px 6px 9.6px rgba(0, 0, 0, 0.24)".to_string()))
    );

    let android = select_platform_shadow(&spec, Platform::Android);
    assert_eq!(android.get("elevation"), Some(&StyleValue::Number(12.0)));

    let ios = select_platform_shadow(&spec, Platform::Ios);
    assert_eq!(ios.get("shadowRadius"), Some(&StyleValue::Number(9.6)));
    assert_eq!(ios.get("shadowOpacity"), Some(&StyleValue::Number(0.24)));
}
