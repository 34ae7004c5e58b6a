//! Themes: the configuration value every style table derives from.
//!
//! A [`Theme`] is a bag of named scales (spacing, color, typography, border,
//! layering) plus a handful of base scalars. It is never validated: odd
//! values flow straight through to the generated styles, and missing scale
//! entries simply produce no corresponding utility (garbage in, garbage
//! out).

pub mod color;
pub mod shadow;

use indexmap::IndexMap;

use crate::style::value::StyleValue;
use color::{shift_color, Color};

/// Root document styling: the defaults a themed surface starts from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootStyle {
    pub font_size: f64,
    pub text_color: Color,
    pub background_color: Color,
}

/// An immutable theme configuration.
///
/// Every scale is an insertion-ordered mapping with unique keys; iteration
/// order is the order utilities are generated in. Breakpoint keys are
/// unordered in the map -- each value defines an activation threshold and
/// the builder sorts by it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Base spacing unit in points.
    pub spacer: f64,
    /// Spacing scale: key → number-or-percentage.
    pub spacers: IndexMap<String, StyleValue>,
    /// Semantic colors (`primary`, `danger`, ...).
    pub theme_colors: IndexMap<String, Color>,
    /// Named raw colors (`blue`, `teal`, ...).
    pub colors: IndexMap<String, Color>,
    /// Weight → signed lightness shift; `"500"` is conventionally `0`.
    pub color_weights: IndexMap<String, f64>,
    /// Gray ramp.
    pub grays: IndexMap<String, Color>,
    /// Breakpoint key → minimum viewport width.
    pub breakpoints: IndexMap<String, f64>,
    /// Default border width in points.
    pub border_width: f64,
    /// Border width scale.
    pub border_widths: IndexMap<String, f64>,
    /// Default border radius in points.
    pub border_radius_base: f64,
    /// Border radius scale.
    pub border_radius: IndexMap<String, f64>,
    /// Body font size scale (`fs-*`).
    pub font_sizes: IndexMap<String, f64>,
    /// Heading font size scale (`h1`..`h6`).
    pub header_font_sizes: IndexMap<String, f64>,
    /// Display (hero) font size scale.
    pub display_font_sizes: IndexMap<String, f64>,
    /// Font weight scale; values are CSS weight strings.
    pub font_weights: IndexMap<String, String>,
    /// Weight applied to headings.
    pub header_font_weight: String,
    /// Weight applied to display sizes.
    pub display_font_weight: String,
    /// Z-index layering scale.
    pub z_index: IndexMap<String, i32>,
    /// Root document styling.
    pub root: RootStyle,
}

impl Theme {
    /// Theme colors followed by raw colors: the "base color" list used for
    /// weighted color expansion and alert variants.
    pub fn base_colors(&self) -> impl Iterator<Item = (&str, Color)> {
        self.theme_colors
            .iter()
            .chain(self.colors.iter())
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// The merged color table used by `bg-*`, `text-*`, and `border-*`
    /// utilities: `black`/`white`, every base color, every base color
    /// shifted by every configured weight (keyed `{color}-{weight}`), and
    /// the gray ramp.
    pub fn palette(&self) -> IndexMap<String, Color> {
        let mut palette = IndexMap::new();
        palette.insert("black".to_string(), Color::BLACK);
        palette.insert("white".to_string(), Color::WHITE);
        for (name, color) in self.base_colors() {
            palette.insert(name.to_string(), color);
        }
        for (name, color) in self.base_colors() {
            for (weight, amount) in &self.color_weights {
                palette.insert(format!("{name}-{weight}"), shift_color(color, *amount));
            }
        }
        for (name, color) in &self.grays {
            palette.insert(name.clone(), *color);
        }
        palette
    }

    /// Breakpoints sorted by ascending minimum width.
    pub fn breakpoints_sorted(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<_> = self
            .breakpoints
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));
        sorted
    }
}

fn named<V, K: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> IndexMap<String, V> {
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

fn hex(s: &str) -> Color {
    // Defaults below are compile-time constants; a typo is a crate bug.
    Color::parse_hex(s).expect("default theme color")
}

impl Default for Theme {
    /// Bootstrap-like default theme: spacing 0..5, semantic + raw colors,
    /// gray ramp, `sm`..`xxl` breakpoints, weights 100..900.
    fn default() -> Self {
        Self {
            spacer: 16.0,
            spacers: named([
                ("0", StyleValue::num(0.0)),
                ("1", StyleValue::num(4.0)),
                ("2", StyleValue::num(8.0)),
                ("3", StyleValue::num(16.0)),
                ("4", StyleValue::num(24.0)),
                ("5", StyleValue::num(48.0)),
            ]),
            theme_colors: named([
                ("primary", hex("#0d6efd")),
                ("secondary", hex("#6c757d")),
                ("success", hex("#198754")),
                ("info", hex("#0dcaf0")),
                ("warning", hex("#ffc107")),
                ("danger", hex("#dc3545")),
                ("light", hex("#f8f9fa")),
                ("dark", hex("#212529")),
            ]),
            colors: named([
                ("blue", hex("#0d6efd")),
                ("indigo", hex("#6610f2")),
                ("purple", hex("#6f42c1")),
                ("pink", hex("#d63384")),
                ("red", hex("#dc3545")),
                ("orange", hex("#fd7e14")),
                ("yellow", hex("#ffc107")),
                ("green", hex("#198754")),
                ("teal", hex("#20c997")),
                ("cyan", hex("#0dcaf0")),
            ]),
            color_weights: named([
                ("100", -0.8),
                ("200", -0.6),
                ("300", -0.4),
                ("400", -0.2),
                ("500", 0.0),
                ("600", 0.2),
                ("700", 0.4),
                ("800", 0.6),
                ("900", 0.8),
            ]),
            grays: named([
                ("gray-100", hex("#f8f9fa")),
                ("gray-200", hex("#e9ecef")),
                ("gray-300", hex("#dee2e6")),
                ("gray-400", hex("#ced4da")),
                ("gray-500", hex("#adb5bd")),
                ("gray-600", hex("#6c757d")),
                ("gray-700", hex("#495057")),
                ("gray-800", hex("#343a40")),
                ("gray-900", hex("#212529")),
            ]),
            breakpoints: named([
                ("sm", 576.0),
                ("md", 768.0),
                ("lg", 992.0),
                ("xl", 1200.0),
                ("xxl", 1400.0),
            ]),
            border_width: 1.0,
            border_widths: named([
                ("1", 1.0),
                ("2", 2.0),
                ("3", 3.0),
                ("4", 4.0),
                ("5", 5.0),
            ]),
            border_radius_base: 4.0,
            border_radius: named([
                ("1", 2.0),
                ("2", 4.0),
                ("3", 8.0),
                ("4", 16.0),
                ("5", 32.0),
                ("pill", 9999.0),
            ]),
            font_sizes: named([
                ("1", 40.0),
                ("2", 32.0),
                ("3", 28.0),
                ("4", 24.0),
                ("5", 20.0),
                ("6", 16.0),
            ]),
            header_font_sizes: named([
                ("1", 40.0),
                ("2", 32.0),
                ("3", 28.0),
                ("4", 24.0),
                ("5", 20.0),
                ("6", 16.0),
            ]),
            display_font_sizes: named([
                ("1", 80.0),
                ("2", 72.0),
                ("3", 64.0),
                ("4", 56.0),
                ("5", 48.0),
                ("6", 40.0),
            ]),
            font_weights: named([
                ("lighter", "lighter".to_string()),
                ("light", "300".to_string()),
                ("normal", "400".to_string()),
                ("medium", "500".to_string()),
                ("semibold", "600".to_string()),
                ("bold", "700".to_string()),
                ("bolder", "bolder".to_string()),
            ]),
            header_font_weight: "500".to_string(),
            display_font_weight: "300".to_string(),
            z_index: named([
                ("dropdown", 1000),
                ("sticky", 1020),
                ("fixed", 1030),
                ("modal-backdrop", 1050),
                ("modal", 1055),
                ("popover", 1070),
                ("tooltip", 1080),
                ("toast", 1090),
            ]),
            root: RootStyle {
                font_size: 16.0,
                text_color: hex("#212529"),
                background_color: hex("#ffffff"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_colors_chains_theme_then_raw() {
        let theme = Theme::default();
        let names: Vec<_> = theme.base_colors().map(|(k, _)| k).collect();
        assert_eq!(&names[..2], &["primary", "secondary"]);
        assert!(names.contains(&"teal"));
        assert_eq!(names.len(), theme.theme_colors.len() + theme.colors.len());
    }

    #[test]
    fn palette_contains_black_white_and_grays() {
        let palette = Theme::default().palette();
        assert_eq!(palette.get("black"), Some(&Color::BLACK));
        assert_eq!(palette.get("white"), Some(&Color::WHITE));
        assert_eq!(palette.get("gray-300"), Some(&hex("#dee2e6")));
    }

    #[test]
    fn palette_expands_every_weight() {
        let theme = Theme::default();
        let palette = theme.palette();
        for (name, color) in theme.base_colors() {
            for (weight, amount) in &theme.color_weights {
                let key = format!("{name}-{weight}");
                assert_eq!(
                    palette.get(&key),
                    Some(&shift_color(color, *amount)),
                    "missing or wrong {key}"
                );
            }
        }
    }

    #[test]
    fn palette_weight_500_is_base_color() {
        let theme = Theme::default();
        let palette = theme.palette();
        assert_eq!(palette.get("primary-500"), palette.get("primary"));
    }

    #[test]
    fn breakpoints_sorted_by_width() {
        let mut theme = Theme::default();
        // Deliberately shuffled insertion order.
        theme.breakpoints = named([("lg", 992.0), ("sm", 576.0), ("md", 768.0)]);
        assert_eq!(
            theme.breakpoints_sorted(),
            vec![("sm", 576.0), ("md", 768.0), ("lg", 992.0)]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn theme_serde_round_trip() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
