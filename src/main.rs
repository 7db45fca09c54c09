//! CRM Hub - Main Entry Point
//!
//! Server builds render the shell through dioxus::serve() and mount the
//! booking API beside it. Browser builds check the mount point, then launch.

use crm_hub::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use crm_hub::handlers::api_router;
    use crm_hub::infrastructure::repositories::PersonRepository;
    use tower_http::trace::TraceLayer;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting CRM Hub...");

    let people = PersonRepository::new();

    dioxus::serve(move || {
        let people = people.clone();
        async move {
            let router = dioxus::server::router(App)
                .merge(api_router(people))
                .layer(TraceLayer::new_for_http());

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    use crm_hub::bootstrap::ensure_mount_point;
    use crm_hub::config::{DEFAULT_COLOR_SCHEME, MOUNT_POINT_ID};
    use crm_hub::shared::logging::{log_bootstrap_failure, log_bootstrap_start};

    // Without a mount point there is nothing to render into
    if let Err(e) = ensure_mount_point() {
        log_bootstrap_failure(&e.to_string());
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&e.to_string()));
        panic!("{e}");
    }

    log_bootstrap_start(MOUNT_POINT_ID, DEFAULT_COLOR_SCHEME.as_str());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
