//! Flat style objects: ordered property → value maps with cascade-style merge.

use indexmap::IndexMap;

use crate::style::value::StyleValue;

/// A flat mapping from CSS-like property names (React-Native camelCase
/// convention, e.g. `paddingTop`, `backgroundColor`) to primitive values.
///
/// Insertion order is preserved; setting an existing property replaces its
/// value in place. Property names come from a fixed vocabulary, so they are
/// `&'static str`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    props: IndexMap<&'static str, StyleValue>,
}

impl StyleObject {
    /// Create an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any existing value.
    pub fn set(&mut self, property: &'static str, value: impl Into<StyleValue>) {
        self.props.insert(property, value.into());
    }

    /// Look up a property.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.props.get(property)
    }

    /// Returns `true` if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Iterate over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (*k, v))
    }

    /// Merge `other` on top of `self`: properties set in `other` win,
    /// everything else is kept. This is the cascade rule used when a
    /// component requests several utility classes at once.
    pub fn merge(&self, other: &StyleObject) -> StyleObject {
        let mut merged = self.clone();
        for (k, v) in &other.props {
            merged.props.insert(k, v.clone());
        }
        merged
    }
}

impl FromIterator<(&'static str, StyleValue)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (&'static str, StyleValue)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

/// Construct a [`StyleObject`] from `property: value` pairs.
///
/// Property names are written as identifiers in the React-Native camelCase
/// convention; values are anything convertible into a
/// [`StyleValue`](crate::style::value::StyleValue).
///
/// ```
/// use stylemap::style::value::StyleValue;
/// use stylemap::style;
///
/// let s = style! {
///     paddingTop: 16.0,
///     width: StyleValue::percent(50.0),
///     alignItems: "flex-start",
/// };
/// assert_eq!(s.get("paddingTop"), Some(&StyleValue::Number(16.0)));
/// ```
#[macro_export]
macro_rules! style {
    ( $( $prop:ident : $value:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut obj = $crate::style::object::StyleObject::new();
        $( obj.set(stringify!($prop), $value); )*
        obj
    }};
}
