use dioxus::prelude::*;

use crate::app::components::{AccountActionLink, NavLink};
use crate::app::routes::Route;
use crate::config::VERSION_BADGE;
use crate::domain::models::{AccountAction, NavigationEntry};
use crate::app::state::use_shell_state;
use crate::shared::hooks::use_color_scheme;
use crate::shared::logging::log_navigation_rejected;

/// Persistent sidebar plus the content region for the active child route
#[component]
pub fn Shell() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let color_scheme = use_color_scheme();
    let mut shell = use_shell_state()?;
    let state = shell();
    let shell_class = if color_scheme.is_dark() { "c-shell c-shell--dark" } else { "c-shell" };

    // Selecting and navigating always happen together
    let follow = move |entry: NavigationEntry| {
        let result = shell.write().follow(&entry);
        match result {
            Ok(route) => {
                navigator().push(route);
            }
            Err(e) => log_navigation_rejected(entry.label, &e.to_string()),
        }
    };

    let trigger = move |action: AccountAction| shell.read().trigger(action);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "{shell_class}",
            nav { class: "c-shell__navbar",
                div { class: "c-shell__navbar-main",
                    div { class: "c-shell__header",
                        code { class: "c-shell__version", "{VERSION_BADGE}" }
                    }
                    for entry in state.entries().iter().copied() {
                        NavLink {
                            key: "{entry.label}",
                            entry,
                            active: state.is_marked(&entry),
                            onfollow: follow,
                        }
                    }
                }

                div { class: "c-shell__footer",
                    for action in AccountAction::ALL {
                        AccountActionLink {
                            key: "{action.as_str()}",
                            action,
                            ontrigger: trigger,
                        }
                    }
                }
            }

            main { class: "c-shell__main",
                Outlet::<Route> {}
            }
        }
    }
}
