//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is server-rendered by the Leptos app and hydrated in the
//! browser. The WASM/JS/CSS bundle lives under `/pkg`; any other path is
//! first tried as a file under the site root (images, favicon) and otherwise
//! handed to the app, whose router answers unknown paths with the not-found
//! page and a 404 status.


use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Load Leptos options from the workspace metadata, applying a site root
/// override when one is configured.
///
/// # Errors
///
/// Returns [`ServeError::Leptos`] when the configuration cannot be read.
pub fn leptos_options(site_root: Option<&Path>) -> Result<LeptosOptions, ServeError> {
    let conf = leptos::config::get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    Ok(with_site_root(conf.leptos_options, site_root))
}

fn with_site_root(mut options: LeptosOptions, site_root: Option<&Path>) -> LeptosOptions {
    if let Some(root) = site_root {
        options.site_root = Arc::from(root.to_string_lossy().as_ref());
    }
    options
}

/// Full application router: SSR pages, bundle, static files, health probe.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = Path::new(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref());

    let pages = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(options);

    pages
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
