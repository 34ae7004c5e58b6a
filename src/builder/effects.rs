//! Effect generators: shadow levels and z-index layers.

use crate::builder::{GenCtx, Partial};
use crate::style;
use crate::theme::shadow::{elevation_shadow, select_platform_shadow, ShadowSpec};

/// Shadow levels: `none`, `sm`, base, `lg`, lowered per platform.
pub(crate) fn shadows(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let platform = ctx.env.platform;
    let mut out = Partial::new();
    out.insert(
        format!("shadow{i}-none"),
        select_platform_shadow(&ShadowSpec::none(), platform),
    );
    out.insert(
        format!("shadow{i}-sm"),
        select_platform_shadow(&elevation_shadow(2.0), platform),
    );
    out.insert(
        format!("shadow{i}"),
        select_platform_shadow(&elevation_shadow(12.0), platform),
    );
    out.insert(
        format!("shadow{i}-lg"),
        select_platform_shadow(&elevation_shadow(24.0), platform),
    );
    out
}

pub(crate) fn z_index(ctx: &GenCtx<'_>) -> Partial {
    let i = ctx.infix;
    let mut out = Partial::new();
    for (k, v) in &ctx.theme.z_index {
        out.insert(format!("zindex{i}-{k}"), style! { zIndex: *v });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Environment, Platform, ScreenSize};
    use crate::style::value::StyleValue;
    use crate::theme::Theme;
    use indexmap::IndexMap;

    fn run(generator: fn(&GenCtx<'_>) -> Partial, env: &Environment, infix: &str) -> Partial {
        let theme = Theme::default();
        let palette = IndexMap::new();
        let ctx = GenCtx {
            theme: &theme,
            env,
            palette: &palette,
            infix,
            grid_columns: 12,
            base_pass: infix.is_empty(),
        };
        generator(&ctx)
    }

    #[test]
    fn four_shadow_levels() {
        let out = run(shadows, &Environment::web(false), "-md");
        assert_eq!(out.len(), 4);
        assert!(out.contains_key("shadow-md-none"));
        assert!(out.contains_key("shadow-md-sm"));
        assert!(out.contains_key("shadow-md"));
        assert!(out.contains_key("shadow-md-lg"));
    }

    #[test]
    fn shadows_are_platform_lowered() {
        let web = run(shadows, &Environment::web(false), "");
        assert_eq!(
            web["shadow-none"].get("boxShadow"),
            Some(&StyleValue::Literal("none"))
        );
        let android = Environment::native(Platform::Android, ScreenSize::new(400.0, 800.0));
        let native = run(shadows, &android, "");
        assert_eq!(
            native["shadow-lg"].get("elevation"),
            Some(&StyleValue::Number(24.0))
        );
        assert!(native["shadow-lg"].get("boxShadow").is_none());
    }

    #[test]
    fn z_index_layers_from_theme() {
        let out = run(z_index, &Environment::web(false), "");
        assert_eq!(
            out["zindex-fixed"].get("zIndex"),
            Some(&StyleValue::Number(1030.0))
        );
        assert_eq!(out.len(), Theme::default().z_index.len());
    }
}
