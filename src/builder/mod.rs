//! Style table construction: the utility-class generator catalog.
//!
//! The catalog is a set of independent pure generator functions, each
//! producing a partial `class → style` mapping for one utility category.
//! [`build_style_table`] runs the whole catalog once per breakpoint pass
//! (base first, then breakpoints by ascending minimum width) and merges the
//! partials. Every generated class name embeds the pass infix, so passes
//! never collide; within a pass, a duplicate key would be a catalog bug and
//! is resolved last-write-wins (see the cardinality test below).

pub mod borders;
pub mod compound;
pub mod effects;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod spacing;
pub mod typography;

use indexmap::IndexMap;

use crate::platform::Environment;
use crate::style::object::StyleObject;
use crate::style::table::{StyleEntry, StyleTable};
use crate::theme::color::Color;
use crate::theme::Theme;

/// A partial mapping produced by one generator for one breakpoint pass.
pub(crate) type Partial = IndexMap<String, StyleObject>;

/// Shared inputs for one generator invocation.
pub(crate) struct GenCtx<'a> {
    pub theme: &'a Theme,
    pub env: &'a Environment,
    /// Merged color table (black/white + base colors + weighted + grays),
    /// computed once per build.
    pub palette: &'a IndexMap<String, Color>,
    /// `""` for the base pass, `"-{breakpoint}"` otherwise.
    pub infix: &'a str,
    pub grid_columns: usize,
    /// `true` only for the base (always-active) pass.
    pub base_pass: bool,
}

/// The fixed generator catalog, in table order.
pub(crate) const GENERATORS: &[fn(&GenCtx<'_>) -> Partial] = &[
    layout::display,
    layout::flex,
    layout::alignment,
    layout::position,
    layout::order,
    layout::insets,
    layout::sizing,
    spacing::margin,
    spacing::padding,
    spacing::gap,
    palette::background,
    palette::text_color,
    typography::fonts,
    typography::text,
    typography::sizes,
    typography::headings,
    borders::borders,
    borders::rounded,
    effects::shadows,
    effects::z_index,
    grid::grid,
    grid::containers,
    compound::absolute_fill,
    compound::positioning,
    compound::alerts,
];

/// Expand a theme into the complete utility-class style table.
///
/// Pure and deterministic: structurally equal inputs produce structurally
/// equal tables. One entry set is generated for the base variant plus one
/// per breakpoint key; `grid_columns` sizes the `col-*` utilities (12 is
/// the conventional value; `0` simply emits no sized columns).
pub fn build_style_table(theme: &Theme, grid_columns: usize, env: &Environment) -> StyleTable {
    let palette = theme.palette();
    let mut table = StyleTable::new();

    let mut passes: Vec<Option<&str>> = vec![None];
    passes.extend(theme.breakpoints_sorted().into_iter().map(|(k, _)| Some(k)));

    for pass in passes {
        let infix = pass.map(|k| format!("-{k}")).unwrap_or_default();
        let ctx = GenCtx {
            theme,
            env,
            palette: &palette,
            infix: &infix,
            grid_columns,
            base_pass: pass.is_none(),
        };
        for generator in GENERATORS {
            for (class, style) in generator(&ctx) {
                table.insert(
                    class,
                    StyleEntry {
                        style,
                        breakpoint: pass.map(str::to_string),
                    },
                );
            }
        }
    }

    table
}
