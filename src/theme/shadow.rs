//! Elevation shadows and platform shadow selection.
//!
//! Shadows are described platform-neutrally by [`ShadowSpec`] and lowered to
//! a concrete style object per renderer: `boxShadow` on web, `elevation` on
//! Android, `shadow*` properties on iOS.

use crate::platform::Platform;
use crate::style::object::StyleObject;
use crate::style::value::StyleValue;
use crate::theme::color::Color;

/// Platform-neutral shadow description.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowSpec {
    pub color: Color,
    /// Offset as `(width, height)` in points.
    pub offset: (f64, f64),
    pub opacity: f64,
    pub radius: f64,
    /// Android elevation level.
    pub elevation: f64,
    /// Explicit web `boxShadow` override (e.g. `"none"`); when unset, the
    /// web value is composed from the other fields.
    pub box_shadow: Option<&'static str>,
}

impl ShadowSpec {
    /// A shadow that renders nothing on every platform.
    pub fn none() -> Self {
        Self {
            color: Color::BLACK,
            offset: (0.0, 0.0),
            opacity: 0.0,
            radius: 0.0,
            elevation: 0.0,
            box_shadow: Some("none"),
        }
    }

    /// Replace the shadow color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Derive a shadow from a material elevation level.
///
/// Deterministic and monotonic: offset height, blur radius, and opacity all
/// grow with the level. Level 0 yields an invisible shadow.
pub fn elevation_shadow(level: f64) -> ShadowSpec {
    let level = level.max(0.0);
    // Round to sane precision so the composed boxShadow string stays clean.
    let opacity = ((0.18 + 0.005 * level).min(0.35) * 100.0).round() / 100.0;
    let radius = (0.8 * level * 10.0).round() / 10.0;
    ShadowSpec {
        color: Color::BLACK,
        offset: (0.0, 0.5 * level),
        opacity: if level == 0.0 { 0.0 } else { opacity },
        radius,
        elevation: level,
        box_shadow: None,
    }
}

/// Lower a [`ShadowSpec`] to the target platform's style properties.
pub fn select_platform_shadow(spec: &ShadowSpec, platform: Platform) -> StyleObject {
    let mut style = StyleObject::new();
    match platform {
        Platform::Web => {
            let value = match spec.box_shadow {
                Some(literal) => StyleValue::Literal(literal),
                None => StyleValue::Str(format!(
                    "{}px {}px {}px rgba({}, {}, {}, {})",
                    spec.offset.0,
                    spec.offset.1,
                    spec.radius,
                    spec.color.r,
                    spec.color.g,
                    spec.color.b,
                    spec.opacity,
                )),
            };
            style.set("boxShadow", value);
        }
        Platform::Android => {
            style.set("elevation", spec.elevation);
            style.set("shadowColor", spec.color);
        }
        Platform::Ios => {
            style.set("shadowColor", spec.color);
            style.set("shadowOffsetWidth", spec.offset.0);
            style.set("shadowOffsetHeight", spec.offset.1);
            style.set("shadowOpacity", spec.opacity);
            style.set("shadowRadius", spec.radius);
        }
    }
    style
}
