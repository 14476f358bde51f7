mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, StoreConfig};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::forms::{routes as forms_routes, FormService};
use crate::features::locations::{routes as locations_routes, LocationService};
use crate::features::registrations::{routes as registrations_routes, RegistrationService};
use crate::features::roster::{routes as roster_routes, RosterService};
use crate::features::validation::routes as validation_routes;
use crate::modules::local_state::LocalStateStore;
use crate::modules::reference_data::ReferenceDataLoader;
use crate::modules::remote_store::{
    InMemoryRemoteStore, PgRemoteStore, RemoteStore, RestRemoteStore,
};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn RemoteStore>> {
    let store: Arc<dyn RemoteStore> = match config {
        StoreConfig::Postgres(db) => {
            let pool = database::connect(db)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize database: {}", e))?;
            Arc::new(PgRemoteStore::new(pool))
        }
        StoreConfig::Rest(rest) => {
            let store = RestRemoteStore::new(rest)
                .map_err(|e| anyhow::anyhow!("Failed to initialize REST store: {}", e))?;
            tracing::info!("REST store configured for {}", rest.base_url);
            Arc::new(store)
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store; registrations are lost on restart");
            Arc::new(InMemoryRemoteStore::new())
        }
    };

    Ok(store)
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load environment variables
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Remote store
    tracing::info!("Initializing remote store (backend: {})", config.store.backend_name());
    let store = build_store(&config.store).await?;
    tracing::info!("Remote store ready ({})", store.backend());

    // Reference data; a failed load leaves the service running with no locations
    let loader = ReferenceDataLoader::new(config.reference_data.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize reference data loader: {}", e))?;
    let (directory, load_error) = loader.load_or_empty().await;
    let directory = Arc::new(directory);

    let local_state = Arc::new(LocalStateStore::new(&config.local_state.path));
    tracing::info!(
        "Local state file: {} (key '{}')",
        local_state.path().display(),
        config.local_state.key
    );

    // Services
    let location_service = Arc::new(LocationService::new(
        Arc::clone(&directory),
        load_error.map(|e| e.to_string()),
    ));
    let roster_service = Arc::new(RosterService::new(Arc::clone(&store)));
    let registration_service = Arc::new(RegistrationService::new(
        Arc::clone(&directory),
        Arc::clone(&store),
        Arc::clone(&local_state),
        Arc::clone(&roster_service),
        config.registration.clone(),
        config.local_state.key.clone(),
    ));
    let form_service = Arc::new(FormService::new(
        Arc::clone(&registration_service),
        config.app.form_session_ttl,
    ));
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(locations_routes::routes(location_service))
        .merge(validation_routes::routes())
        .merge(registrations_routes::routes(registration_service))
        .merge(forms_routes::routes(form_service))
        .merge(roster_routes::routes(roster_service))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
