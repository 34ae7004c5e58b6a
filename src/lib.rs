//! # stylemap
//!
//! A themeable utility-class style system: expand a design-token theme into
//! a Bootstrap-flavored table of class names (`p-3`, `bg-primary-500`,
//! `col-md-6`, ...) mapped to typed style objects, then filter that table by
//! viewport width for mobile-first responsive resolution.
//!
//! Generation is pure and happens once per theme; resolution is a cheap
//! filter that reruns per resize. [`StyleEngine`] ties the two together with
//! identity-keyed caching.
//!
//! ## Core Systems
//!
//! - **[`theme`]** — Design tokens: color scales, spacers, breakpoints, shadows
//! - **[`style`]** — Typed style values, objects, tables, and the active view
//! - **[`builder`]** — The generator catalog expanding a theme into a table
//! - **[`resolver`]** — Viewport-width filtering with mobile-first thresholds
//! - **[`engine`]** — Stateful cache serving filtered views per width
//! - **[`platform`]** — Explicit platform/server-render/screen environment

// Foundation
pub mod platform;
pub mod style;
pub mod theme;

// Table generation and resolution
pub mod builder;
pub mod resolver;

// Stateful front door
pub mod engine;

pub use builder::build_style_table;
pub use engine::{StyleEngine, DEFAULT_GRID_COLUMNS};
pub use platform::{Environment, Platform, ScreenSize};
pub use resolver::{active_breakpoints, resolve, BreakpointPolicy};
pub use style::object::StyleObject;
pub use style::table::{ActiveStyleMap, StyleEntry, StyleTable};
pub use style::value::StyleValue;
pub use theme::color::{shift_color, Color, ColorError};
pub use theme::shadow::{elevation_shadow, select_platform_shadow, ShadowSpec};
pub use theme::{RootStyle, Theme};
