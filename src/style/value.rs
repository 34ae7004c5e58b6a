//! Primitive style values: numbers, percentages, colors, keywords.

use std::fmt;

use crate::theme::color::Color;

/// A single primitive style value, e.g. `16`, `50%`, `auto`, `#0d6efd`,
/// `"flex-start"`.
///
/// Style objects are flat maps from property names to these values. Numbers
/// are unit-less (interpreted as density-independent points by native
/// renderers and as `px` by the web renderer); strings carry everything that
/// is not representable as a number, such as viewport units (`"50vw"`) or
/// composed shadows.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A unit-less number.
    Number(f64),
    /// A percentage of the parent dimension.
    Percent(f64),
    /// Auto-size (content- or layout-determined).
    Auto,
    /// A color value.
    Color(Color),
    /// An enumerated keyword, e.g. `"flex-start"`, `"solid"`, `"500"`.
    Literal(&'static str),
    /// A computed string, e.g. `"50vw"` or a composed `boxShadow`.
    Str(String),
}

impl StyleValue {
    /// Create a number value.
    pub fn num(value: f64) -> Self {
        Self::Number(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f64) -> Self {
        Self::Percent(value)
    }

    /// Returns the numeric payload if this is a [`StyleValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the color payload if this is a [`StyleValue::Color`].
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }
}

/// Print a float without a trailing fraction when it is integral.
fn fmt_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt_number(f, *n),
            Self::Percent(p) => {
                fmt_number(f, *p)?;
                write!(f, "%")
            }
            Self::Auto => write!(f, "auto"),
            Self::Color(c) => write!(f, "{c}"),
            Self::Literal(s) => write!(f, "{s}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::Literal(value)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Serialized as a plain number or a CSS-like string (`"50%"`, `"auto"`,
/// `"#0d6efd"`, anything else verbatim). Keyword values deserialize into
/// [`StyleValue::Str`].
#[cfg(feature = "serde")]
impl serde::Serialize for StyleValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StyleValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl serde::de::Visitor<'_> for ValueVisitor {
            type Value = StyleValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a CSS-like value string")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<StyleValue, E> {
                Ok(StyleValue::Number(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<StyleValue, E> {
                Ok(StyleValue::Number(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<StyleValue, E> {
                Ok(StyleValue::Number(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<StyleValue, E> {
                if v == "auto" {
                    return Ok(StyleValue::Auto);
                }
                if let Some(stripped) = v.strip_suffix('%') {
                    if let Ok(p) = stripped.parse::<f64>() {
                        return Ok(StyleValue::Percent(p));
                    }
                }
                if v.starts_with('#') {
                    if let Ok(color) = v.parse::<Color>() {
                        return Ok(StyleValue::Color(color));
                    }
                }
                Ok(StyleValue::Str(v.to_string()))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_number_displays_without_fraction() {
        assert_eq!(StyleValue::num(16.0).to_string(), "16");
        assert_eq!(StyleValue::num(0.5).to_string(), "0.5");
    }

    #[test]
    fn percent_display() {
        assert_eq!(StyleValue::percent(50.0).to_string(), "50%");
        assert_eq!(StyleValue::percent(12.5).to_string(), "12.5%");
    }

    #[test]
    fn auto_display() {
        assert_eq!(StyleValue::Auto.to_string(), "auto");
    }

    #[test]
    fn literal_and_str_display() {
        assert_eq!(StyleValue::from("flex-start").to_string(), "flex-start");
        assert_eq!(StyleValue::from(String::from("50vw")).to_string(), "50vw");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(StyleValue::from(3), StyleValue::Number(3.0));
        assert_eq!(StyleValue::from(3.5), StyleValue::Number(3.5));
        assert_eq!(
            StyleValue::from(Color::rgb(0x33, 0x66, 0x99)),
            StyleValue::Color(Color::rgb(0x33, 0x66, 0x99))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_by_value() {
        for value in [
            StyleValue::num(16.0),
            StyleValue::percent(50.0),
            StyleValue::Auto,
            StyleValue::Color(Color::rgb(0x0d, 0x6e, 0xfd)),
            StyleValue::Str("50vw".to_string()),
        ] {
            let json = serde_json::to_string(&value).unwrap();
            let back: StyleValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value, "{json}");
        }
        // Keyword values come back as owned strings.
        let json = serde_json::to_string(&StyleValue::Literal("solid")).unwrap();
        let back: StyleValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StyleValue::Str("solid".to_string()));
    }

    #[test]
    fn accessors() {
        assert_eq!(StyleValue::num(4.0).as_number(), Some(4.0));
        assert_eq!(StyleValue::Auto.as_number(), None);
        assert_eq!(
            StyleValue::Color(Color::BLACK).as_color(),
            Some(Color::BLACK)
        );
        assert_eq!(StyleValue::num(4.0).as_color(), None);
    }
}
