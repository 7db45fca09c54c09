use dioxus::prelude::*;

use crate::domain::models::NavigationEntry;

/// Sidebar link for one navigation entry.
/// The browser's own navigation is suppressed; `onfollow` decides what happens.
#[component]
pub fn NavLink(entry: NavigationEntry, active: bool, onfollow: EventHandler<NavigationEntry>) -> Element {
    rsx! {
        a {
            class: "c-shell__link",
            "data-active": active.then_some("true"),
            href: entry.path,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                onfollow.call(entry);
            },
            span { class: "c-shell__link-icon", "data-icon": entry.icon.as_str(), "{entry.icon.glyph()}" }
            span { "{entry.label}" }
        }
    }
}
