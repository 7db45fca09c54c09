use dioxus::prelude::*;

use crate::domain::models::AccountAction;

/// Footer affordance ("Change account", "Logout")
#[component]
pub fn AccountActionLink(action: AccountAction, ontrigger: EventHandler<AccountAction>) -> Element {
    let icon = action.icon();

    rsx! {
        a {
            class: "c-shell__link",
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                ontrigger.call(action);
            },
            span { class: "c-shell__link-icon", "data-icon": icon.as_str(), "{icon.glyph()}" }
            span { "{action.label()}" }
        }
    }
}
