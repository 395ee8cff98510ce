//! Axum routes that server render the card showcase and serve the wasm bundle
//! and stylesheet produced by cargo-leptos.
#[cfg(not(debug_assertions))]
use axum::http::{header, HeaderValue};
use axum::Router;
use card_app::{shell, App};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tokio::net::TcpListener;
#[cfg(not(debug_assertions))]
use tower_http::set_header::SetResponseHeader;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::error::ServerError;

pub(crate) fn create_app(leptos_options: LeptosOptions) -> Router {
    let site_root = &leptos_options.site_root;
    let pkg_dir = &leptos_options.site_pkg_dir;
    // The URL path of the generated JS/WASM bundle from cargo-leptos
    let bundle_path = format!("/{pkg_dir}");
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!("./{site_root}/{pkg_dir}");
    info!("Serving pkg dir: {bundle_filepath}");

    let pkg_service = ServeDir::new(&bundle_filepath);
    #[cfg(not(debug_assertions))]
    let pkg_service = SetResponseHeader::appending(
        pkg_service,
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400, immutable"),
    );

    let routes = generate_route_list(App);
    Router::new()
        .nest_service(&bundle_path, pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

pub(crate) async fn start_web() -> Result<(), ServerError> {
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let app = create_app(leptos_options);

    info!("listening on http://{addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
