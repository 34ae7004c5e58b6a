//! Layout generators: display, flex, alignment, position, insets, sizing.

use crate::builder::{GenCtx, Partial};
use crate::platform::Environment;
use crate::style;
use crate::style::value::StyleValue;

/// Percentage steps used by insets and sizing: 5..=100 step 5.
/// (Zero is emitted separately as a plain number.)
fn percent_steps() -> impl Iterator<Item = u32> {
    (1..=20).map(|i| i * 5)
}

/// `vw`/`vh` value: a concrete number against the native screen, or a
/// viewport-unit string on web.
fn viewport(env: &Environment, axis: char, x: u32) -> StyleValue {
    match env.screen {
        Some(s) => {
            let extent = if axis == 'w' { s.width } else { s.height };
            StyleValue::Number(extent * x as f64 / 100.0)
        }
        None => StyleValue::Str(format!("{x}v{axis}")),
    }
}

/// `dvw`/`dvh` value: like [`viewport`], but on web prefers the dynamic
/// viewport unit when the CSS feature probe reports support.
fn dynamic_viewport(env: &Environment, axis: char, x: u32) -> StyleValue {
    match env.screen {
        Some(_) => viewport(env, axis, x),
        None if env.dynamic_viewport_units => StyleValue::Str(format!("{x}dv{axis}")),
        None => StyleValue::Str(format!("{x}v{axis}")),
    }
}

pub(crate) fn display(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    out.insert(format!("d{i}-none"), style! { display: "none" });
    out.insert(format!("d{i}-flex"), style! { display: "flex" });
    if ctx.env.platform.is_web() {
        for mode in [
            "inline",
            "inline-block",
            "block",
            "grid",
            "inline-grid",
            "table",
            "table-cell",
            "table-row",
            "inline-flex",
        ] {
            out.insert(format!("d{i}-{mode}"), style! { display: mode });
        }
    }
    out
}

pub(crate) fn flex(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for dir in ["row", "column", "row-reverse", "column-reverse"] {
        out.insert(format!("flex{i}-{dir}"), style! { flexDirection: dir });
    }
    out.insert(
        format!("flex{i}-fill"),
        style! { flex: 1, flexBasis: StyleValue::Auto },
    );
    for wrap in ["wrap", "nowrap", "wrap-reverse"] {
        out.insert(format!("flex{i}-{wrap}"), style! { flexWrap: wrap });
    }
    out.insert(format!("flex-grow{i}-0"), style! { flexGrow: 0 });
    out.insert(format!("flex-grow{i}-1"), style! { flexGrow: 1 });
    out.insert(format!("flex-shrink{i}-0"), style! { flexShrink: 0 });
    out.insert(format!("flex-shrink{i}-1"), style! { flexShrink: 1 });
    out
}

pub(crate) fn alignment(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for (suffix, value) in [
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("center", "center"),
        ("between", "space-between"),
        ("around", "space-around"),
        ("evenly", "space-evenly"),
    ] {
        out.insert(
            format!("justify-content{i}-{suffix}"),
            style! { justifyContent: value },
        );
    }
    for (suffix, value) in [
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("center", "center"),
        ("stretch", "stretch"),
        ("between", "space-between"),
        ("around", "space-around"),
    ] {
        out.insert(
            format!("align-content{i}-{suffix}"),
            style! { alignContent: value },
        );
    }
    for (suffix, value) in [
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("center", "center"),
        ("stretch", "stretch"),
        ("baseline", "baseline"),
    ] {
        out.insert(
            format!("align-items{i}-{suffix}"),
            style! { alignItems: value },
        );
        out.insert(
            format!("align-self{i}-{suffix}"),
            style! { alignSelf: value },
        );
    }
    out
}

pub(crate) fn position(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    out.insert(format!("position{i}-relative"), style! { position: "relative" });
    out.insert(format!("position{i}-absolute"), style! { position: "absolute" });
    if ctx.env.platform.is_web() {
        out.insert(format!("position{i}-fixed"), style! { position: "fixed" });
        out.insert(format!("position{i}-sticky"), style! { position: "sticky" });
    }
    for mode in ["visible", "hidden", "scroll"] {
        out.insert(format!("overflow{i}-{mode}"), style! { overflow: mode });
    }
    if ctx.env.platform.is_web() {
        out.insert(format!("overflow{i}-auto"), style! { overflow: "auto" });
    }
    out
}

/// Numeric `order` only exists on the web renderer.
pub(crate) fn order(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    if !ctx.env.platform.is_web() {
        return out;
    }
    out.insert(format!("order{i}-first"), style! { order: -1 });
    out.insert(format!("order{i}-last"), style! { order: 6 });
    for x in 0..6 {
        out.insert(format!("order{i}-{x}"), style! { order: x });
    }
    out
}

pub(crate) fn insets(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    let sides: [&'static str; 6] = ["top", "bottom", "start", "end", "left", "right"];
    for side in sides {
        let mut zero = crate::style::object::StyleObject::new();
        zero.set(side, 0);
        out.insert(format!("{side}{i}-0"), zero);
    }
    for x in percent_steps() {
        for side in sides {
            let mut obj = crate::style::object::StyleObject::new();
            obj.set(side, StyleValue::percent(x as f64));
            out.insert(format!("{side}{i}-{x}"), obj);
        }
    }
    out
}

pub(crate) fn sizing(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let env = ctx.env;
    let mut out = Partial::new();
    out.insert(format!("w{i}-auto"), style! { width: StyleValue::Auto });
    out.insert(format!("h{i}-auto"), style! { height: StyleValue::Auto });
    for x in percent_steps() {
        let pct = StyleValue::percent(x as f64);
        out.insert(format!("w{i}-{x}"), style! { width: pct.clone() });
        out.insert(format!("h{i}-{x}"), style! { height: pct.clone() });
        out.insert(format!("vw{i}-{x}"), style! { width: viewport(env, 'w', x) });
        out.insert(format!("vh{i}-{x}"), style! { height: viewport(env, 'h', x) });
        out.insert(
            format!("dvw{i}-{x}"),
            style! { width: dynamic_viewport(env, 'w', x) },
        );
        out.insert(
            format!("dvh{i}-{x}"),
            style! { height: dynamic_viewport(env, 'h', x) },
        );
        out.insert(format!("min-w{i}-{x}"), style! { minWidth: pct.clone() });
        out.insert(format!("min-h{i}-{x}"), style! { minHeight: pct.clone() });
        out.insert(
            format!("min-vw{i}-{x}"),
            style! { minWidth: viewport(env, 'w', x) },
        );
        out.insert(
            format!("min-vh{i}-{x}"),
            style! { minHeight: viewport(env, 'h', x) },
        );
        out.insert(
            format!("min-dvw{i}-{x}"),
            style! { minWidth: dynamic_viewport(env, 'w', x) },
        );
        out.insert(
            format!("min-dvh{i}-{x}"),
            style! { minHeight: dynamic_viewport(env, 'h', x) },
        );
        out.insert(format!("max-w{i}-{x}"), style! { maxWidth: pct.clone() });
        out.insert(format!("max-h{i}-{x}"), style! { maxHeight: pct.clone() });
        out.insert(
            format!("max-vw{i}-{x}"),
            style! { maxWidth: viewport(env, 'w', x) },
        );
        out.insert(
            format!("max-vh{i}-{x}"),
            style! { maxHeight: viewport(env, 'h', x) },
        );
        out.insert(
            format!("max-dvw{i}-{x}"),
            style! { maxWidth: dynamic_viewport(env, 'w', x) },
        );
        out.insert(
            format!("max-dvh{i}-{x}"),
            style! { maxHeight: dynamic_viewport(env, 'h', x) },
        );
    }
    out
}
