//! Responsive resolution: filter a style table down to the classes active
//! at a given viewport width.
//!
//! - Base entries (no breakpoint) are always active.
//! - A breakpoint entry is active once the width reaches its min-width.
//! - Server rendering includes every variant so the client can pick the
//!   right one after hydration.

use indexmap::IndexMap;

use crate::style::table::{ActiveStyleMap, StyleTable};

/// How breakpoint-tagged entries are admitted into the active map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointPolicy {
    /// Mobile-first min-width threshold: a tagged entry is active iff the
    /// viewport width is at or above the breakpoint's min-width. Entries
    /// tagged with a breakpoint that has no configured min-width are never
    /// active.
    ViewportThreshold,
    /// Include every entry regardless of width. Used for server rendering,
    /// where no viewport exists yet.
    ServerRenderIncludeAll,
}

/// Filter `table` down to the classes active at `width`.
///
/// Because the table is generated base-first with breakpoint passes in
/// ascending min-width order, the returned map preserves mobile-first
/// cascade order: iterating it visits base entries before the variants
/// that override them.
pub fn resolve<'a>(
    table: &'a StyleTable,
    width: f64,
    breakpoints: &IndexMap<String, f64>,
    policy: BreakpointPolicy,
) -> ActiveStyleMap<'a> {
    let mut active = ActiveStyleMap::new();
    for (class, entry) in table.iter() {
        let include = match (&entry.breakpoint, policy) {
            (None, _) => true,
            (Some(_), BreakpointPolicy::ServerRenderIncludeAll) => true,
            (Some(bp), BreakpointPolicy::ViewportThreshold) => {
                breakpoints.get(bp).is_some_and(|min| width >= *min)
            }
        };
        if include {
            active.insert(class, &entry.style);
        }
    }
    active
}

/// Names of the breakpoints whose min-width is at or below `width`, in
/// ascending min-width order.
pub fn active_breakpoints(breakpoints: &IndexMap<String, f64>, width: f64) -> Vec<&str> {
    let mut active: Vec<(&str, f64)> = breakpoints
        .iter()
        .filter(|(_, min)| width >= **min)
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    active.sort_by(|a, b| a.1.total_cmp(&b.1));
    active.into_iter().map(|(k, _)| k).collect()
}
