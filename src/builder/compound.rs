//! Compound/structural generators: absolute fill, fixed/sticky helpers,
//! and alert boxes.

use crate::builder::{GenCtx, Partial};
use crate::style;
use crate::theme::color::shift_color;

/// Fallback layering when the theme's z-index scale lacks the named layer.
const FIXED_Z_INDEX: i32 = 1030;
const STICKY_Z_INDEX: i32 = 1020;

pub(crate) fn absolute_fill(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    out.insert(
        format!("absolute{i}-fill"),
        style! { position: "absolute", left: 0, right: 0, top: 0, bottom: 0 },
    );
    out
}

/// Fixed/sticky edge pinning; these positions only exist on web.
pub(crate) fn positioning(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    if !ctx.env.platform.is_web() {
        return out;
    }
    let z = |layer: &str, fallback: i32| {
        ctx.theme.z_index.get(layer).copied().unwrap_or(fallback)
    };
    out.insert(
        format!("fixed{i}-top"),
        style! {
            position: "fixed",
            top: 0,
            left: 0,
            right: 0,
            zIndex: z("fixed", FIXED_Z_INDEX),
        },
    );
    out.insert(
        format!("fixed{i}-bottom"),
        style! {
            position: "fixed",
            bottom: 0,
            left: 0,
            right: 0,
            zIndex: z("fixed", FIXED_Z_INDEX),
        },
    );
    out.insert(
        format!("sticky{i}-top"),
        style! {
            position: "sticky",
            top: 0,
            left: 0,
            right: 0,
            zIndex: z("sticky", STICKY_Z_INDEX),
        },
    );
    out
}

/// The alert frame plus one color variant per base color, computed by
/// shifting at the 700/200/100 weights. A variant is only generated when
/// all three weights are configured.
pub(crate) fn alerts(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let theme = ctx.theme;
    let mut out = Partial::new();
    out.insert(
        format!("alert{i}"),
        style! {
            padding: theme.spacer,
            borderStyle: "solid",
            borderWidth: theme.border_width,
            borderRadius: theme.border_radius_base,
        },
    );
    let weights = (
        theme.color_weights.get("700"),
        theme.color_weights.get("200"),
        theme.color_weights.get("100"),
    );
    if let (Some(&text), Some(&border), Some(&background)) = weights {
        for (name, color) in theme.base_colors() {
            out.insert(
                format!("alert{i}-{name}"),
                style! {
                    color: shift_color(color, text),
                    borderColor: shift_color(color, border),
                    backgroundColor: shift_color(color, background),
                },
            );
        }
    }
    out
}
