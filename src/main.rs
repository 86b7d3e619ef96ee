use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use albums_api::app::create_app;
use albums_api::config::Config;
use albums_api::db::{pool::create_pool, Database};
use albums_api::domains::user::placeholder::ProfilePlaceholders;
use albums_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env()?;

  let pool = create_pool(&config).await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database migrations applied successfully");

  let db = Database::new(pool.clone(), config.db_timeout);
  let app_state = SharedAppState::new(db, ProfilePlaceholders::new(config.placeholder_seed));
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

  tracing::info!("API is running on port {}", config.port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  pool.close().await;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
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

  tracing::info!("Received termination signal, shutting down gracefully...");
}
