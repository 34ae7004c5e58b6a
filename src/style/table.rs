//! Style tables: class name → style entry, and the viewport-filtered view.

use indexmap::IndexMap;

use crate::style::object::StyleObject;

/// One utility-class entry: a style object plus the breakpoint it is
/// qualified by. `breakpoint: None` is the mobile-first base variant that is
/// always active; `Some(key)` only applies at or above that breakpoint's
/// configured minimum width.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub style: StyleObject,
    pub breakpoint: Option<String>,
}

impl StyleEntry {
    /// Create a base (always-active) entry.
    pub fn base(style: StyleObject) -> Self {
        Self {
            style,
            breakpoint: None,
        }
    }

    /// Create a breakpoint-qualified entry.
    pub fn at(style: StyleObject, breakpoint: impl Into<String>) -> Self {
        Self {
            style,
            breakpoint: Some(breakpoint.into()),
        }
    }
}

/// The full, unfiltered mapping from class name to [`StyleEntry`], derived
/// from one theme (and grid-column count).
///
/// Class names are breakpoint-qualified and therefore unique across the
/// whole table; if a catalog bug ever emits the same name twice, the later
/// insertion overwrites the earlier (last-write-wins -- kept as the merge
/// policy for compatibility, and tested as a catalog-authoring invariant).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    entries: IndexMap<String, StyleEntry>,
}

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting any previous entry with the same name.
    pub fn insert(&mut self, class: impl Into<String>, entry: StyleEntry) {
        self.entries.insert(class.into(), entry);
    }

    /// Look up an entry by class name.
    pub fn get(&self, class: &str) -> Option<&StyleEntry> {
        self.entries.get(class)
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(class, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over class names in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Extend<(String, StyleEntry)> for StyleTable {
    fn extend<I: IntoIterator<Item = (String, StyleEntry)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// The live, viewport-filtered view of a [`StyleTable`]: class name →
/// style object, breakpoint stripped.
///
/// Borrows from the table it was resolved from, so producing one per resize
/// event never clones style objects. The whole map is produced wholesale and
/// replaces the previous one atomically from the consumer's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveStyleMap<'a> {
    classes: IndexMap<&'a str, &'a StyleObject>,
}

impl<'a> ActiveStyleMap<'a> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, class: &'a str, style: &'a StyleObject) {
        self.classes.insert(class, style);
    }

    /// Look up the style for a class name.
    pub fn get(&self, class: &str) -> Option<&'a StyleObject> {
        self.classes.get(class).copied()
    }

    /// Returns `true` if the class is currently active.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Returns `true` if no classes are active.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of active classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Iterate over `(class, style)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a StyleObject)> + '_ {
        self.classes.iter().map(|(k, v)| (*k, *v))
    }

    /// Resolve a component's requested class list against this map, merging
    /// in request order (later classes win). Class names that are not active
    /// (or do not exist at all) are unstyled lookup misses and contribute
    /// nothing.
    pub fn resolve_classes(&self, classes: &[&str]) -> StyleObject {
        let mut merged = StyleObject::new();
        for class in classes {
            if let Some(style) = self.get(class) {
                merged = merged.merge(style);
            }
        }
        merged
    }
}
