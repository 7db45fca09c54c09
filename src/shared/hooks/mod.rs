// Custom Dioxus hooks
pub mod use_theme;

pub use use_theme::{use_color_scheme, apply_color_scheme, ColorScheme, ThemeConfig};
