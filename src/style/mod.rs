//! Style primitives: values, flat style objects, and class tables.

pub mod object;
pub mod table;
pub mod value;

pub use object::StyleObject;
pub use table::{ActiveStyleMap, StyleEntry, StyleTable};
pub use value::StyleValue;
