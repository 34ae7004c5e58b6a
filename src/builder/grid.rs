//! Grid generators: rows, sized columns, and responsive containers.

use crate::builder::{GenCtx, Partial};
use crate::style;
use crate::style::value::StyleValue;

/// Maximum width of the non-fluid container.
const CONTAINER_MAX_WIDTH: f64 = 1280.0;

/// `row`, `col`, `col-auto`, and `col-1..=N` sized at `100 * i / N` percent.
pub(crate) fn grid(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();

    out.insert(
        format!("row{i}"),
        style! { display: "flex", flexDirection: "row", flexWrap: "wrap" },
    );
    out.insert(format!("col{i}"), style! { display: "flex", flex: 1 });

    let mut auto = style! {
        display: "flex",
        flexGrow: 0,
        flexShrink: 0,
        flexBasis: StyleValue::Auto,
    };
    if ctx.env.platform.is_web() {
        auto.set("width", StyleValue::Auto);
    }
    out.insert(format!("col{i}-auto"), auto);

    for n in 1..=ctx.grid_columns {
        out.insert(
            format!("col{i}-{n}"),
            style! {
                display: "flex",
                flexGrow: 0,
                flexShrink: 0,
                flexBasis: StyleValue::Auto,
                width: StyleValue::percent(100.0 * n as f64 / ctx.grid_columns as f64),
            },
        );
    }
    out
}

/// Responsive containers. `container-fluid` carries no infix in its class
/// name, so it is emitted on the base pass only; the qualified `container`
/// variant exists per breakpoint.
pub(crate) fn containers(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let padding = 0.75 * ctx.theme.spacer;
    let mut out = Partial::new();
    out.insert(
        format!("container{i}"),
        style! {
            width: StyleValue::percent(100.0),
            marginHorizontal: StyleValue::Auto,
            paddingHorizontal: padding,
            maxWidth: CONTAINER_MAX_WIDTH,
        },
    );
    if ctx.base_pass {
        out.insert(
            "container-fluid".to_string(),
            style! {
                width: StyleValue::percent(100.0),
                marginHorizontal: StyleValue::Auto,
                paddingHorizontal: padding,
            },
        );
    }
    out
}
