//! The stateful front door: owns a theme, keeps the generated style table
//! cached, and serves viewport-filtered views.
//!
//! Table generation is the expensive step (tens of thousands of entries for
//! a full theme), so it only reruns when an input that feeds generation
//! changes: the theme value, the grid-column count, or the environment.
//! Viewport width only feeds resolution, which is a cheap filter over the
//! cached table.

use std::sync::Arc;

use crate::builder::build_style_table;
use crate::platform::Environment;
use crate::resolver::{resolve, BreakpointPolicy};
use crate::style::table::{ActiveStyleMap, StyleTable};
use crate::theme::Theme;

/// Default number of grid columns, matching the usual 12-column grid.
pub const DEFAULT_GRID_COLUMNS: usize = 12;

/// Caches the style table generated from one theme + environment and
/// resolves it against viewport widths on demand.
///
/// Themes are shared via [`Arc`] and treated as immutable: the cache is
/// keyed on pointer identity, so handing the engine the same `Arc` back is
/// free, while any new `Arc` (even one with equal contents) regenerates.
/// Mutating a theme through shared interior state would bypass the cache
/// key; build a new `Arc<Theme>` instead.
pub struct StyleEngine {
    theme: Arc<Theme>,
    grid_columns: usize,
    env: Environment,
    table: StyleTable,
    #[cfg(test)]
    rebuilds: usize,
}

impl StyleEngine {
    /// Build an engine (and its table) for a theme, with the default
    /// 12-column grid.
    pub fn new(theme: Arc<Theme>, env: Environment) -> Self {
        Self::with_grid_columns(theme, DEFAULT_GRID_COLUMNS, env)
    }

    /// Build an engine with an explicit grid-column count.
    pub fn with_grid_columns(theme: Arc<Theme>, grid_columns: usize, env: Environment) -> Self {
        let table = build_style_table(&theme, grid_columns, &env);
        Self {
            theme,
            grid_columns,
            env,
            table,
            #[cfg(test)]
            rebuilds: 1,
        }
    }

    /// The theme the cached table was generated from.
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// The cached, unfiltered table.
    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    /// Swap in a new theme. A no-op when `theme` is the same allocation as
    /// the current one; otherwise the table is regenerated.
    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        if Arc::ptr_eq(&self.theme, &theme) {
            return;
        }
        self.theme = theme;
        self.rebuild();
    }

    /// Change the grid-column count, regenerating the table if it differs.
    pub fn set_grid_columns(&mut self, grid_columns: usize) {
        if self.grid_columns == grid_columns {
            return;
        }
        self.grid_columns = grid_columns;
        self.rebuild();
    }

    /// Change the environment, regenerating the table if it differs.
    pub fn set_environment(&mut self, env: Environment) {
        if self.env == env {
            return;
        }
        self.env = env;
        self.rebuild();
    }

    /// Resolve the cached table against a viewport width. Under server
    /// rendering every responsive variant is included regardless of width.
    ///
    /// This is the per-resize path: no regeneration, just a filter.
    pub fn styles_for_width(&self, width: f64) -> ActiveStyleMap<'_> {
        let policy = if self.env.server_render {
            BreakpointPolicy::ServerRenderIncludeAll
        } else {
            BreakpointPolicy::ViewportThreshold
        };
        resolve(&self.table, width, &self.theme.breakpoints, policy)
    }

    fn rebuild(&mut self) {
        self.table = build_style_table(&self.theme, self.grid_columns, &self.env);
        #[cfg(test)]
        {
            self.rebuilds += 1;
        }
    }
}
