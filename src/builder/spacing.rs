//! Spacing generators: margin, padding, gap — all driven by the spacer scale.

use crate::builder::{GenCtx, Partial};
use crate::style;
use crate::style::object::StyleObject;
use crate::style::value::StyleValue;

/// Margin sides and axis shorthands, with `auto` variants.
pub(crate) fn margin(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let spacers = &ctx.theme.spacers;
    let mut out = Partial::new();

    out.insert(format!("m{i}-auto"), style! { margin: StyleValue::Auto });
    for (k, v) in spacers {
        out.insert(format!("m{i}-{k}"), style! { margin: v.clone() });
    }
    out.insert(
        format!("mx{i}-auto"),
        style! { marginHorizontal: StyleValue::Auto },
    );
    out.insert(
        format!("my{i}-auto"),
        style! { marginVertical: StyleValue::Auto },
    );
    for (k, v) in spacers {
        out.insert(format!("mx{i}-{k}"), style! { marginHorizontal: v.clone() });
        out.insert(format!("my{i}-{k}"), style! { marginVertical: v.clone() });
    }

    let sides: [(&str, &'static str); 6] = [
        ("mt", "marginTop"),
        ("mb", "marginBottom"),
        ("ms", "marginStart"),
        ("me", "marginEnd"),
        ("ml", "marginLeft"),
        ("mr", "marginRight"),
    ];
    for (stem, property) in sides {
        let mut auto = StyleObject::new();
        auto.set(property, StyleValue::Auto);
        out.insert(format!("{stem}{i}-auto"), auto);
    }
    for (k, v) in spacers {
        for (stem, property) in sides {
            let mut obj = StyleObject::new();
            obj.set(property, v.clone());
            out.insert(format!("{stem}{i}-{k}"), obj);
        }
    }
    out
}

/// Padding sides and axis shorthands (no `auto` — padding has none).
pub(crate) fn padding(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let spacers = &ctx.theme.spacers;
    let mut out = Partial::new();

    for (k, v) in spacers {
        out.insert(format!("p{i}-{k}"), style! { padding: v.clone() });
    }
    for (k, v) in spacers {
        out.insert(format!("px{i}-{k}"), style! { paddingHorizontal: v.clone() });
        out.insert(format!("py{i}-{k}"), style! { paddingVertical: v.clone() });
    }
    for (k, v) in spacers {
        for (stem, property) in [
            ("pt", "paddingTop"),
            ("pb", "paddingBottom"),
            ("ps", "paddingStart"),
            ("pe", "paddingEnd"),
            ("pl", "paddingLeft"),
            ("pr", "paddingRight"),
        ] {
            let mut obj = StyleObject::new();
            obj.set(property, v.clone());
            out.insert(format!("{stem}{i}-{k}"), obj);
        }
    }
    out
}

/// Gap utilities: all, row, and column gaps.
pub(crate) fn gap(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for (k, v) in &ctx.theme.spacers {
        out.insert(format!("gap{i}-{k}"), style! { gap: v.clone() });
    }
    for (k, v) in &ctx.theme.spacers {
        out.insert(format!("gap-row{i}-{k}"), style! { rowGap: v.clone() });
        out.insert(format!("gap-col{i}-{k}"), style! { columnGap: v.clone() });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Environment;
    use crate::theme::Theme;
    use indexmap::IndexMap;

    fn run(generator: fn(&GenCtx<'_>) -> Partial, infix: &str) -> Partial {
        let theme = Theme::default();
        let env = Environment::web(false);
        let palette = IndexMap::new();
        let ctx = GenCtx {
            theme: &theme,
            env: &env,
            palette: &palette,
            infix,
            grid_columns: 12,
            base_pass: infix.is_empty(),
        };
        generator(&ctx)
    }

    #[test]
    fn margin_covers_all_sides_and_auto() {
        let out = run(margin, "");
        assert_eq!(out["m-auto"].get("margin"), Some(&StyleValue::Auto));
        assert_eq!(out["m-3"].get("margin"), Some(&StyleValue::Number(16.0)));
        assert_eq!(
            out["mx-2"].get("marginHorizontal"),
            Some(&StyleValue::Number(8.0))
        );
        assert_eq!(out["me-auto"].get("marginEnd"), Some(&StyleValue::Auto));
        assert_eq!(
            out["mr-5"].get("marginRight"),
            Some(&StyleValue::Number(48.0))
        );
        // 9 stems x 6 spacers + 9 auto variants.
        assert_eq!(out.len(), 9 * 6 + 9);
    }

    #[test]
    fn padding_has_no_auto() {
        let out = run(padding, "");
        assert!(!out.contains_key("p-auto"));
        assert_eq!(out["p-0"].get("padding"), Some(&StyleValue::Number(0.0)));
        assert_eq!(
            out["ps-1"].get("paddingStart"),
            Some(&StyleValue::Number(4.0))
        );
        assert_eq!(out.len(), 9 * 6);
    }

    #[test]
    fn gap_row_and_column() {
        let out = run(gap, "-lg");
        assert_eq!(out["gap-lg-3"].get("gap"), Some(&StyleValue::Number(16.0)));
        assert_eq!(
            out["gap-row-lg-2"].get("rowGap"),
            Some(&StyleValue::Number(8.0))
        );
        assert_eq!(
            out["gap-col-lg-2"].get("columnGap"),
            Some(&StyleValue::Number(8.0))
        );
    }
}
