//! Border generators: widths, sides, colors, and corner radii.

use crate::builder::{GenCtx, Partial};
use crate::style;
use crate::style::object::StyleObject;
use crate::theme::color::Color;

const SIDES: [(&str, &'static str, &'static str); 6] = [
    ("top", "borderTopWidth", "borderTopColor"),
    ("bottom", "borderBottomWidth", "borderBottomColor"),
    ("start", "borderStartWidth", "borderStartColor"),
    ("end", "borderEndWidth", "borderEndColor"),
    ("left", "borderLeftWidth", "borderLeftColor"),
    ("right", "borderRightWidth", "borderRightColor"),
];

/// A solid border fragment. The default border color comes from the gray
/// ramp; when the theme has no `gray-300` the color property is simply
/// omitted (absence, not a crash).
fn solid(
    width_property: &'static str,
    width: f64,
    color_property: &'static str,
    color: Option<Color>,
    reset_width: bool,
) -> StyleObject {
    let mut obj = StyleObject::new();
    if reset_width {
        obj.set("borderWidth", 0);
    }
    obj.set(width_property, width);
    if let Some(c) = color {
        obj.set(color_property, c);
    }
    obj.set("borderStyle", "solid");
    obj
}

pub(crate) fn borders(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let theme = ctx.theme;
    let default_color = theme.grays.get("gray-300").copied();
    let mut out = Partial::new();

    out.insert(
        format!("border{i}"),
        solid("borderWidth", theme.border_width, "borderColor", default_color, false),
    );
    for (side, width_prop, color_prop) in SIDES {
        out.insert(
            format!("border{i}-{side}"),
            solid(width_prop, theme.border_width, color_prop, default_color, true),
        );
    }

    out.insert(format!("border{i}-0"), style! { borderWidth: 0 });
    for (side, width_prop, _) in SIDES {
        let mut zero = StyleObject::new();
        zero.set(width_prop, 0);
        out.insert(format!("border{i}-{side}-0"), zero);
    }

    for (k, v) in &theme.border_widths {
        out.insert(
            format!("border{i}-{k}"),
            solid("borderWidth", *v, "borderColor", default_color, false),
        );
        for (side, width_prop, color_prop) in SIDES {
            out.insert(
                format!("border{i}-{side}-{k}"),
                solid(width_prop, *v, color_prop, default_color, false),
            );
        }
    }

    for (name, color) in ctx.palette {
        out.insert(format!("border{i}-{name}"), style! { borderColor: *color });
    }
    out
}

/// Corner groups for the side radius helpers.
const CORNER_GROUPS: [(&str, [&'static str; 2]); 6] = [
    ("top", ["borderTopLeftRadius", "borderTopRightRadius"]),
    ("bottom", ["borderBottomLeftRadius", "borderBottomRightRadius"]),
    ("start", ["borderTopStartRadius", "borderBottomStartRadius"]),
    ("end", ["borderTopEndRadius", "borderBottomEndRadius"]),
    ("left", ["borderTopLeftRadius", "borderBottomLeftRadius"]),
    ("right", ["borderTopRightRadius", "borderBottomRightRadius"]),
];

fn corners(properties: [&'static str; 2], radius: f64) -> StyleObject {
    let mut obj = StyleObject::new();
    obj.set(properties[0], radius);
    obj.set(properties[1], radius);
    obj
}

pub(crate) fn rounded(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let theme = ctx.theme;
    let mut out = Partial::new();

    out.insert(
        format!("rounded{i}"),
        style! { borderRadius: theme.border_radius_base },
    );
    for (group, properties) in CORNER_GROUPS {
        out.insert(
            format!("rounded{i}-{group}"),
            corners(properties, theme.border_radius_base),
        );
    }

    out.insert(format!("rounded{i}-0"), style! { borderRadius: 0 });
    for (group, properties) in CORNER_GROUPS {
        out.insert(format!("rounded{i}-{group}-0"), corners(properties, 0.0));
    }

    for (k, v) in &theme.border_radius {
        out.insert(format!("rounded{i}-{k}"), style! { borderRadius: *v });
        for (group, properties) in CORNER_GROUPS {
            out.insert(format!("rounded{i}-{group}-{k}"), corners(properties, *v));
        }
    }
    out
}
