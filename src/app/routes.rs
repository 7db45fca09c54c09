use dioxus::prelude::*;
use std::str::FromStr;

use crate::app::components::ThemeProvider;
use crate::app::layouts::Shell;
use crate::app::pages::{Home, NotFound};
use crate::config::DEFAULT_COLOR_SCHEME;
use crate::shared::errors::{Result, ShellError};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    // Default child of the shell
    #[route("/")]
    Home {},

    // Anything else renders a not-found placeholder inside the shell
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Select the route for a URL path
    pub fn resolve(path: &str) -> Result<Route> {
        Route::from_str(path).map_err(|_| ShellError::UnroutablePath(path.to_string()))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

/// Root component: theme context around the router
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("CRM shell initialized");
    });

    rsx! {
        ThemeProvider { color_scheme: DEFAULT_COLOR_SCHEME,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_home() {
        let route = Route::resolve("/").unwrap();
        assert_eq!(route, Route::Home {});
        assert!(!route.is_fallback());
        assert_eq!(route.to_string(), "/");
    }

    #[test]
    fn test_unknown_path_resolves_to_fallback() {
        let route = Route::resolve("/unknown").unwrap();
        assert!(route.is_fallback());
        assert_eq!(route, Route::NotFound { segments: vec!["unknown".to_string()] });
        assert_eq!(route.to_string(), "/unknown");
    }

    #[test]
    fn test_nested_unknown_path_keeps_segments() {
        match Route::resolve("/reports/2024").unwrap() {
            Route::NotFound { segments } => assert_eq!(segments, vec!["reports", "2024"]),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    fn render_at(path: &str) -> String {
        use dioxus_history::{History, MemoryHistory};
        use std::rc::Rc;

        let mut dom = VirtualDom::new(App);
        dom.provide_root_context(Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn assert_sidebar(html: &str) {
        assert!(html.contains("c-shell__navbar"), "sidebar missing: {html}");
        assert!(html.contains("Homepage"));
        assert!(html.contains("Change account"));
        assert!(html.contains("Logout"));
        assert!(html.contains(crate::config::VERSION_BADGE));
    }

    #[test]
    fn test_root_renders_home_inside_shell() {
        let html = render_at("/");

        assert!(html.contains(r#"data-color-scheme="dark""#));
        assert_sidebar(&html);
        assert!(html.contains(r#"<main class="c-shell__main"><section class="c-home">"#));
        assert!(!html.contains("Page not found"));
    }

    #[test]
    fn test_exactly_one_link_marked_active() {
        let html = render_at("/");

        assert_eq!(html.matches(r#"data-active="true""#).count(), 1);
        let marked = html.find(r#"data-active="true""#).unwrap();
        let homepage = html.find("Homepage").unwrap();
        let logout = html.find("Logout").unwrap();
        assert!(marked < homepage && homepage < logout);
    }

    #[test]
    fn test_unknown_path_renders_fallback_inside_shell() {
        let html = render_at("/unknown");

        assert!(html.contains(r#"data-color-scheme="dark""#));
        assert_sidebar(&html);
        assert!(html.contains(r#"<main class="c-shell__main"><section class="c-not-found">"#));
        assert!(html.contains("Page not found"));
        assert!(html.contains("/unknown"));
        assert!(!html.contains(r#"class="c-home""#));
    }

    #[test]
    fn test_nested_unknown_path_renders_full_path() {
        let html = render_at("/reports/2024");

        assert!(html.contains("c-not-found__path"));
        assert!(html.contains("/reports/2024"));
        assert_sidebar(&html);
    }
}
