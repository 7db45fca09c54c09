use dioxus::prelude::*;
use std::str::FromStr;

/// Color schemes the theme context can be configured with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    Auto,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
            ColorScheme::Auto => "auto",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl FromStr for ColorScheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            "auto" => Ok(ColorScheme::Auto),
            _ => Err(()),
        }
    }
}

/// Theme context installed once by `ThemeProvider` for the whole session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeConfig {
    pub color_scheme: ColorScheme,
}

impl ThemeConfig {
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self { color_scheme }
    }
}

/// Reads the color scheme from the surrounding `ThemeProvider`.
/// Falls back to the default scheme when rendered outside a provider.
pub fn use_color_scheme() -> ColorScheme {
    try_use_context::<ThemeConfig>()
        .map(|config| config.color_scheme)
        .unwrap_or_default()
}

/// Apply the color scheme to the document element
#[cfg(target_arch = "wasm32")]
pub async fn apply_color_scheme(scheme: ColorScheme) {
    let script = format!(
        r#"document.documentElement.setAttribute('data-color-scheme', '{}');"#,
        scheme.as_str()
    );

    let _ = document::eval(&script).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn apply_color_scheme(_scheme: ColorScheme) {
    // No-op on server
}
