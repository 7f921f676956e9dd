//! HTTP server assembly and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use log::{debug, info};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::services::ServeDir;

use crate::{
    bootstrap::{prepare_store, StartupError},
    config::WebConfig,
    routes::{
        about_handler, contact_handler, create_project_handler, home_handler, legacy_handler,
        new_project_form_handler, projects_handler, resume_handler, thankyou_handler,
    },
    state::AppState,
};

/// Builds the full route table over `state`.
pub fn build_router(state: Arc<AppState>, config: &WebConfig) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/resume", get(resume_handler))
        .route("/projects", get(projects_handler))
        .route(
            "/projects/new",
            get(new_project_form_handler).post(create_project_handler),
        )
        .route("/add_project", get(new_project_form_handler))
        .route("/contact", get(contact_handler))
        .route("/thankyou", get(thankyou_handler))
        .route("/templates/{page}", get(legacy_handler))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Prepares storage, binds the listener and serves until a shutdown signal.
pub async fn serve(config: WebConfig) -> Result<(), StartupError> {
    info!("Initializing state...");
    let store = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || prepare_store(&config))
            .await
            .map_err(|err| StartupError::Serve(std::io::Error::other(err)))??
    };
    let app = build_router(AppState::new(store), &config);

    let address = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })?;
    let local_address = listener.local_addr().map_err(StartupError::Serve)?;
    info!(
        "event=server_start module=web status=ok address={local_address} debug={}",
        config.debug
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("event=server_stop module=web status=ok");
    Ok(())
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    debug!(
        "event=http_request module=web method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                log::error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
