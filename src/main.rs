use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;

use sgal_backend::config::environment::EnvironmentConfig;
use sgal_backend::database::connection::{create_pool, mask_database_url, run_migrations};
use sgal_backend::routes::create_app;
use sgal_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("S.G.A.L. - Sistema de Gestión Administrativa de Laboratorio");
    info!("===========================================================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar base de datos
    info!(
        "Conectando a la base de datos: {}",
        mask_database_url(&config.database_url)
    );
    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    run_migrations(&pool).await?;
    info!("Migraciones aplicadas");

    let state = AppState::new(pool, config.clone());
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Servidor iniciando en http://{}", addr);
    info!("Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /api/auth/login - Inicio de sesión");
    info!("   POST /api/auth/logout - Cierre de sesión");
    info!("   POST /api/auth/register - Registro (admin)");
    info!("   GET  /api/auth/profile - Perfil del usuario autenticado");
    info!("   GET  /api/clients - Clientes (CRUD)");
    info!("   GET  /api/cotizaciones - Cotizaciones (CRUD + stats)");
    info!("   GET  /api/grupos - Grupos (CRUD + miembros)");
    info!("   GET  /api/solicitudes - Solicitudes (CRUD + aprobar/rechazar)");
    info!("   GET  /api/facturacion - Solicitudes de facturación");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("Servidor terminado");
    Ok(())
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
            info!("Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("Señal de terminación recibida, apagando servidor...");
        },
    }
}
