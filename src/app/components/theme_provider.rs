use dioxus::prelude::*;

use crate::shared::hooks::{apply_color_scheme, ColorScheme, ThemeConfig};

/// Installs the theme context for everything below it.
/// The scheme is read once; later prop changes are ignored.
#[component]
pub fn ThemeProvider(color_scheme: ColorScheme, children: Element) -> Element {
    let config = use_context_provider(|| ThemeConfig::new(color_scheme));

    use_effect(move || {
        spawn(async move {
            apply_color_scheme(config.color_scheme).await;
        });
    });

    rsx! {
        div {
            class: "c-theme",
            "data-color-scheme": config.color_scheme.as_str(),
            {children}
        }
    }
}
