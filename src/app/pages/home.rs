use dioxus::prelude::*;

/// Default content of the shell
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-home",
            h1 { class: "c-home__title", "Homepage" }
            p { class: "c-home__lead",
                "Welcome to the CRM hub. Pick a section from the sidebar."
            }
        }
    }
}
