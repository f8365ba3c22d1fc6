//! Brigada Server - Volunteer Fire Brigade Management System
//!
//! REST API server backing the brigade administration dashboard.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brigada_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("brigada_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Brigada Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(
        repository,
        config.auth.clone(),
        config.backup.clone(),
    );

    // Seed the simulated fleet from whatever vehicles exist
    match services.vehicles.list().await {
        Ok(vehicles) => {
            if let Err(e) = services.tracking.seed_from_vehicles(&vehicles) {
                tracing::warn!("Could not seed tracking fleet: {}", e);
            }
        }
        Err(e) => tracing::warn!("Skipping tracking seed, vehicles unavailable: {}", e),
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Vehicles
        .route("/vehicles", get(api::vehicles::list_vehicles))
        .route("/vehicles", post(api::vehicles::create_vehicle))
        .route("/vehicles/:id", get(api::vehicles::get_vehicle))
        .route("/vehicles/:id", put(api::vehicles::update_vehicle))
        .route("/vehicles/:id", delete(api::vehicles::delete_vehicle))
        .route("/vehicles/:id/equipment", get(api::vehicles::list_vehicle_equipment))
        .route("/vehicles/:id/equipment", post(api::vehicles::add_vehicle_equipment))
        .route("/vehicle-equipment/:id", delete(api::vehicles::remove_vehicle_equipment))
        // Inventory
        .route("/inventory", get(api::inventory::list_inventory))
        .route("/inventory", post(api::inventory::create_inventory_item))
        .route("/inventory/:id", get(api::inventory::get_inventory_item))
        .route("/inventory/:id", put(api::inventory::update_inventory_item))
        .route("/inventory/:id", delete(api::inventory::delete_inventory_item))
        // Maintenance
        .route("/maintenance", get(api::maintenance::list_maintenance))
        .route("/maintenance", post(api::maintenance::create_maintenance_task))
        .route("/maintenance/:id", get(api::maintenance::get_maintenance_task))
        .route("/maintenance/:id", put(api::maintenance::update_maintenance_task))
        .route("/maintenance/:id", delete(api::maintenance::delete_maintenance_task))
        // Tareas
        .route("/tareas", get(api::tareas::list_tareas))
        .route("/tareas", post(api::tareas::create_tarea))
        .route("/tareas/activas", get(api::tareas::list_active_tareas))
        .route("/tareas/:id", get(api::tareas::get_tarea))
        .route("/tareas/:id", put(api::tareas::update_tarea))
        .route("/tareas/:id", delete(api::tareas::delete_tarea))
        // Usuarios
        .route("/usuarios", get(api::usuarios::list_usuarios))
        .route("/usuarios", post(api::usuarios::create_usuario))
        .route("/usuarios/:id", get(api::usuarios::get_usuario))
        .route("/usuarios/:id", put(api::usuarios::update_usuario))
        .route("/usuarios/:id", delete(api::usuarios::delete_usuario))
        // Bodegas
        .route("/bodegas", get(api::bodegas::list_bodegas))
        .route("/bodegas", post(api::bodegas::create_bodega))
        .route("/bodegas/:id", get(api::bodegas::get_bodega))
        .route("/bodegas/:id", put(api::bodegas::update_bodega))
        .route("/bodegas/:id", delete(api::bodegas::delete_bodega))
        // Roles
        .route("/roles", get(api::roles::list_roles))
        .route("/roles", post(api::roles::create_role))
        .route("/roles/:id", get(api::roles::get_role))
        .route("/roles/:id", put(api::roles::update_role))
        .route("/roles/:id", delete(api::roles::delete_role))
        // Checklists
        .route("/checklists/templates", get(api::checklists::list_templates))
        .route("/checklists/templates", post(api::checklists::create_template))
        .route("/checklists/templates/:id", get(api::checklists::get_template))
        .route("/checklists/templates/:id", delete(api::checklists::delete_template))
        .route("/checklists/completions", get(api::checklists::list_completions))
        .route("/checklists/completions", post(api::checklists::record_completion))
        .route("/checklists/completions/:id", get(api::checklists::get_completion))
        // Simulated tracking
        .route("/tracking/fleet", get(api::tracking::poll_fleet))
        .route("/tracking/seed", post(api::tracking::seed_fleet))
        // Simulated backup
        .route("/backup/run", post(api::backup::run_backup))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
