//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the form's native upload action, a health probe,
//! the Leptos SSR page, and the hydrate bundle under `/pkg`.

pub mod upload;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Non-Leptos routes: upload action and health probe.
pub fn upload_routes(config: &Config) -> Router {
    Router::new()
        .route("/upload", post(upload::upload))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
}

/// Full application router: upload routes + Leptos SSR + static bundle.
pub fn app(config: &Config, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Hydrate bundle (WASM, JS, CSS) built by cargo-leptos into <site-root>/pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    upload_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
