use crate::{
    api::handlers::root,
    service::{AuthService, NotificationService, ProfileService},
    store::UserStore,
    APP_USER_AGENT,
};
use anyhow::{anyhow, Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, Request},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;
use url::Url;

mod error;
pub(crate) mod handlers;
mod openapi;

pub use openapi::openapi;

/// Compose services over the given store and notifier and build the full
/// router with middleware.
///
/// # Errors
/// Returns an error if `frontend_origin` is not a valid URL.
pub fn app(
    store: Arc<dyn UserStore>,
    notifier: Arc<dyn NotificationService>,
    frontend_origin: Option<&str>,
) -> Result<Router> {
    let auth = AuthService::new(store.clone(), notifier);
    let profiles = ProfileService::new(store.clone());

    let cors = match frontend_origin {
        Some(origin) => CorsLayer::new()
            .allow_headers([CONTENT_TYPE])
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_origin(AllowOrigin::exact(frontend_origin_header(origin)?)),
        // No allowed origin: cross-origin requests get no CORS headers.
        None => CorsLayer::new(),
    };

    let (router, openapi) = openapi::api_router().split_for_parts();
    let openapi = Arc::new(openapi);

    let app = router
        .route("/", get(root::root))
        .route(
            "/openapi.json",
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi.as_ref().clone()) }
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(auth))
                .layer(Extension(profiles))
                .layer(Extension(store)),
        );

    Ok(app)
}

/// Start the server and run until Ctrl-C or SIGTERM.
///
/// # Errors
/// Returns an error if the router cannot be built or the listener fails.
pub async fn new(
    port: u16,
    store: Arc<dyn UserStore>,
    notifier: Arc<dyn NotificationService>,
    frontend_origin: Option<&str>,
) -> Result<()> {
    let app = app(store, notifier, frontend_origin)?;

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("{APP_USER_AGENT} listening on [::]:{port}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Gracefully shutdown");
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

/// Reduce a configured UI URL to the `scheme://host[:port]` origin browsers send.
fn frontend_origin_header(frontend_url: &str) -> Result<HeaderValue> {
    let parsed =
        Url::parse(frontend_url).with_context(|| format!("Invalid frontend origin: {frontend_url}"))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow!("Frontend origin must include a host: {frontend_url}"))?;
    let port = parsed
        .port()
        .map_or_else(String::new, |port| format!(":{port}"));

    HeaderValue::from_str(&format!("{}://{host}{port}", parsed.scheme()))
        .context("Failed to build frontend origin header")
}
