//! Explicit platform and rendering environment.
//!
//! Platform, server-render, and CSS-feature state are plain inputs rather
//! than ambient globals, so the builder and resolver stay deterministic
//! across platforms without environment faking.

/// The renderer the style table targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Web renderer (DOM + CSS).
    Web,
    /// Native iOS renderer.
    Ios,
    /// Native Android renderer.
    Android,
}

impl Platform {
    /// Returns `true` for the web renderer. A subset of utilities
    /// (inline/grid/table display modes, fixed/sticky positioning, CSS
    /// custom-property font families, text wrapping) only exist there.
    pub fn is_web(self) -> bool {
        matches!(self, Self::Web)
    }
}

/// Native screen dimensions, used to resolve viewport-relative units into
/// concrete numbers on platforms without CSS viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    /// Create a screen size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything ambient the style layer needs, made explicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Target renderer.
    pub platform: Platform,
    /// Server-side render: the resolver includes every responsive variant
    /// so the client can pick the right one after hydration.
    pub server_render: bool,
    /// Result of the web-only CSS feature probe for dynamic viewport units
    /// (`dvw`/`dvh`). When unsupported, `dv*` utilities fall back to `v*`.
    pub dynamic_viewport_units: bool,
    /// Native screen dimensions; `None` on web, where viewport units are
    /// emitted as unit strings instead.
    pub screen: Option<ScreenSize>,
}

impl Environment {
    /// Web environment. Dynamic-viewport-unit support comes from the
    /// caller's CSS feature probe.
    pub fn web(dynamic_viewport_units: bool) -> Self {
        Self {
            platform: Platform::Web,
            server_render: false,
            dynamic_viewport_units,
            screen: None,
        }
    }

    /// Native environment with the observed screen dimensions.
    pub fn native(platform: Platform, screen: ScreenSize) -> Self {
        Self {
            platform,
            server_render: false,
            dynamic_viewport_units: false,
            screen: Some(screen),
        }
    }

    /// Set the server-render flag.
    pub fn with_server_render(mut self, server_render: bool) -> Self {
        self.server_render = server_render;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::web(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_web_detection() {
        assert!(Platform::Web.is_web());
        assert!(!Platform::Ios.is_web());
        assert!(!Platform::Android.is_web());
    }

    #[test]
    fn web_environment_has_no_screen() {
        let env = Environment::web(true);
        assert_eq!(env.platform, Platform::Web);
        assert!(env.screen.is_none());
        assert!(env.dynamic_viewport_units);
        assert!(!env.server_render);
    }

    #[test]
    fn native_environment_carries_screen() {
        let env = Environment::native(Platform::Ios, ScreenSize::new(390.0, 844.0));
        assert_eq!(env.screen, Some(ScreenSize::new(390.0, 844.0)));
        assert!(!env.platform.is_web());
    }

    #[test]
    fn with_server_render() {
        let env = Environment::web(false).with_server_render(true);
        assert!(env.server_render);
    }
}
