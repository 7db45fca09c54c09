use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::shared::logging::log_unmatched_path;

/// Path shown for the catch-all route's segments
pub fn unmatched_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Fallback content for paths no route matches
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = unmatched_path(&segments);

    // The component is reused between unknown paths, so log on every change
    use_effect(use_reactive!(|segments| log_unmatched_path(&unmatched_path(&segments))));

    rsx! {
        section { class: "c-not-found",
            h1 { class: "c-not-found__title", "Page not found" }
            p { class: "c-not-found__path",
                code { "{path}" }
            }
            Link { to: Route::Home {}, class: "c-not-found__back", "Back to the homepage" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_path_joins_segments() {
        assert_eq!(unmatched_path(&["unknown".to_string()]), "/unknown");
        assert_eq!(
            unmatched_path(&["reports".to_string(), "2024".to_string()]),
            "/reports/2024"
        );
        assert_eq!(unmatched_path(&[]), "/");
    }
}
