//! Typography generators: font families, text alignment and decoration,
//! font sizes and weights, headings, display sizes.

use crate::builder::{GenCtx, Partial};
use crate::platform::Platform;
use crate::style;

/// Font family helpers. On web these resolve through CSS custom properties;
/// native platforms get a fixed monospace family per OS.
pub(crate) fn fonts(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    match ctx.env.platform {
        Platform::Web => {
            out.insert(
                format!("font{i}-sans-serif"),
                style! { fontFamily: "var(--font-sans-serif)" },
            );
            out.insert(
                format!("font{i}-monospace"),
                style! { fontFamily: "var(--font-monospace)" },
            );
        }
        Platform::Ios => {
            out.insert(format!("font{i}-monospace"), style! { fontFamily: "Menlo" });
        }
        Platform::Android => {
            out.insert(
                format!("font{i}-monospace"),
                style! { fontFamily: "monospace" },
            );
        }
    }
    out
}

/// Text alignment, transform, wrapping (web), style, and decoration.
pub(crate) fn text(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for align in ["auto", "left", "right", "center", "justify"] {
        out.insert(format!("text{i}-{align}"), style! { textAlign: align });
    }
    for transform in ["lowercase", "uppercase", "capitalize"] {
        out.insert(
            format!("text{i}-{transform}"),
            style! { textTransform: transform },
        );
    }
    if ctx.env.platform.is_web() {
        out.insert(format!("text{i}-wrap"), style! { whiteSpace: "normal" });
        out.insert(format!("text{i}-nowrap"), style! { whiteSpace: "nowrap" });
        out.insert(
            format!("text{i}-break"),
            style! { wordWrap: "break-word", wordBreak: "break-word" },
        );
        out.insert(
            format!("text{i}-truncate"),
            style! { overflow: "hidden", textOverflow: "ellipsis", whiteSpace: "nowrap" },
        );
    }
    out.insert(format!("fst{i}-normal"), style! { fontStyle: "normal" });
    out.insert(format!("fst{i}-italic"), style! { fontStyle: "italic" });
    for decoration in ["none", "underline", "line-through"] {
        out.insert(
            format!("text-decoration{i}-{decoration}"),
            style! { textDecorationLine: decoration },
        );
    }
    out
}

/// Font size (`fs-*`), display size, and font weight scales.
pub(crate) fn sizes(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let theme = ctx.theme;
    let mut out = Partial::new();
    for (k, v) in &theme.font_sizes {
        out.insert(format!("fs{i}-{k}"), style! { fontSize: *v });
    }
    for (k, v) in &theme.display_font_sizes {
        out.insert(
            format!("display{i}-{k}"),
            style! { fontSize: *v, fontWeight: theme.display_font_weight.clone() },
        );
    }
    for (k, v) in &theme.font_weights {
        out.insert(format!("fw{i}-{k}"), style! { fontWeight: v.clone() });
    }
    out
}

/// Heading helpers from the header font-size scale. Note the class shape:
/// the infix follows the heading number (`h1-md`, not `h-md-1`).
pub(crate) fn headings(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let theme = ctx.theme;
    let mut out = Partial::new();
    for (k, v) in &theme.header_font_sizes {
        out.insert(
            format!("h{k}{i}"),
            style! {
                marginTop: 0,
                marginBottom: 0.5 * theme.root.font_size,
                fontWeight: theme.header_font_weight.clone(),
                fontSize: *v,
                lineHeight: 1.2,
            },
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Environment, ScreenSize};
    use crate::style::value::StyleValue;
    use crate::theme::Theme;
    use indexmap::IndexMap;

    fn run(generator: fn(&GenCtx<'_>) -> Partial, env: &Environment, infix: &str) -> Partial {
        let theme = Theme::default();
        let palette = IndexMap::new();
        let ctx = GenCtx {
            theme: &theme,
            env,
            palette: &palette,
            infix,
            grid_columns: 12,
            base_pass: infix.is_empty(),
        };
        generator(&ctx)
    }

    #[test]
    fn fonts_per_platform() {
        let web = run(fonts, &Environment::web(false), "");
        assert_eq!(
            web["font-sans-serif"].get("fontFamily"),
            Some(&StyleValue::Literal("var(--font-sans-serif)"))
        );

        let ios = Environment::native(Platform::Ios, ScreenSize::new(390.0, 844.0));
        let ios_out = run(fonts, &ios, "");
        assert_eq!(
            ios_out["font-monospace"].get("fontFamily"),
            Some(&StyleValue::Literal("Menlo"))
        );
        assert!(!ios_out.contains_key("font-sans-serif"));

        let android = Environment::native(Platform::Android, ScreenSize::new(400.0, 800.0));
        assert_eq!(
            run(fonts, &android, "")["font-monospace"].get("fontFamily"),
            Some(&StyleValue::Literal("monospace"))
        );
    }

    #[test]
    fn truncate_is_web_only() {
        let web = run(text, &Environment::web(false), "");
        assert_eq!(web["text-truncate"].len(), 3);
        let native = Environment::native(Platform::Ios, ScreenSize::new(390.0, 844.0));
        assert!(!run(text, &native, "").contains_key("text-truncate"));
    }

    #[test]
    fn heading_infix_follows_number() {
        let out = run(headings, &Environment::web(false), "-md");
        let h1 = &out["h1-md"];
        assert_eq!(h1.get("fontSize"), Some(&StyleValue::Number(40.0)));
        assert_eq!(h1.get("marginBottom"), Some(&StyleValue::Number(8.0)));
        assert_eq!(h1.get("lineHeight"), Some(&StyleValue::Number(1.2)));
        assert_eq!(h1.get("fontWeight"), Some(&StyleValue::Str("500".into())));
        assert!(!out.contains_key("h-md-1"));
    }

    #[test]
    fn weight_scale_uses_theme_strings() {
        let out = run(sizes, &Environment::web(false), "");
        assert_eq!(
            out["fw-bold"].get("fontWeight"),
            Some(&StyleValue::Str("700".into()))
        );
        assert_eq!(out["fs-6"].get("fontSize"), Some(&StyleValue::Number(16.0)));
        assert_eq!(
            out["display-1"].get("fontSize"),
            Some(&StyleValue::Number(80.0))
        );
    }
}
