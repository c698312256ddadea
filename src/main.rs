mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Logística - API de gestión de despachos");
    info!("==========================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(e);
    }
    info!("✅ Base de datos lista, migraciones al día");

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::from_env();
    info!("🌱 Entorno: {}", config.environment);
    let app_state = AppState::new(pool, config.clone());

    let app = build_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Autenticación:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login (emite JWT)");
    info!("🗺  Rutas (lectura pública):");
    info!("   GET/POST /api/routes, GET/PUT/DELETE /api/routes/:id");
    info!("🚗 Vehículos (lectura pública):");
    info!("   GET/POST /api/vehicles, GET/PUT/DELETE /api/vehicles/:id");
    info!("✈  Aeronaves (lectura pública):");
    info!("   GET/POST /api/aircraft, GET/PUT/DELETE /api/aircraft/:id");
    info!("👥 Clientes (lectura pública):");
    info!("   GET/POST /api/clients, GET/PUT/DELETE /api/clients/:id");
    info!("📦 Cargas (lectura pública):");
    info!("   GET/POST /api/cargo, GET/PUT/DELETE /api/cargo/:id");
    info!("🔒 Despachos, conductores y pilotos requieren JWT en todas las operaciones:");
    info!("   /api/dispatches, /api/drivers, /api/pilots");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Armar el router completo de la aplicación
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/routes", routes::route_routes::create_route_router(state.clone()))
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router(state.clone()))
        .nest("/api/aircraft", routes::aircraft_routes::create_aircraft_router(state.clone()))
        .nest("/api/drivers", routes::driver_routes::create_driver_router(state.clone()))
        .nest("/api/pilots", routes::pilot_routes::create_pilot_router(state.clone()))
        .nest("/api/clients", routes::client_routes::create_client_router(state.clone()))
        .nest("/api/dispatches", routes::dispatch_routes::create_dispatch_router(state.clone()))
        .nest("/api/cargo", routes::cargo_routes::create_cargo_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "logistica",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
