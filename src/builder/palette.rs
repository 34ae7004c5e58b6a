//! Color utility generators: backgrounds and text colors from the merged
//! palette, plus the `-body` root-style variants.

use crate::builder::{GenCtx, Partial};
use crate::style;

pub(crate) fn background(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for (name, color) in ctx.palette {
        out.insert(format!("bg{i}-{name}"), style! { backgroundColor: *color });
    }
    out.insert(
        format!("bg{i}-body"),
        style! { backgroundColor: ctx.theme.root.background_color },
    );
    out
}

pub(crate) fn text_color(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for (name, color) in ctx.palette {
        out.insert(format!("text{i}-{name}"), style! { color: *color });
    }
    out.insert(
        format!("text{i}-body"),
        style! { color: ctx.theme.root.text_color },
    );
    out
}
