//! HTTP surface: JSON API plus the server-rendered views.

pub mod api;
mod error;
pub mod templates;
pub mod views;

use crate::config::Config;
use crate::db::{self, DbPool};
use crate::errors::{AppError, AppResult};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tera::Tera;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application shared state. Holds no connection: each request opens its own.
#[derive(Clone)]
pub struct AppState {
    pub db_path: Arc<PathBuf>,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> AppResult<Self> {
        Ok(Self {
            db_path: Arc::new(db_path.into()),
            templates: Arc::new(templates::load()?),
        })
    }

    /// Run `f` against a fresh connection on the blocking pool.
    ///
    /// The connection is dropped when `f` returns, on success and on error.
    pub async fn with_conn<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        tokio::task::spawn_blocking(move || {
            let mut pool = DbPool::new(path.as_path())?;
            f(&mut pool.conn)
        })
        .await
        .map_err(|e| AppError::Other(format!("database task failed: {e}")))?
    }
}

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::index))
        .route("/table", get(views::table))
        .route("/form", get(views::form_first))
        .route("/form/{id}", get(views::form))
        .route("/notes", get(views::notes))
        .route("/health", get(health))
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Create the schema if needed, bind and serve until Ctrl-C.
pub async fn serve(cfg: &Config) -> AppResult<()> {
    let db_path = PathBuf::from(&cfg.database);
    crate::utils::path::ensure_parent_dir(&db_path)?;
    {
        let pool = DbPool::new(&db_path)?;
        if !db::is_initialized(&pool.conn)? {
            info!("creating schema in {}", db_path.display());
        }
        db::init_db(&pool.conn)?;
    }
    info!("Using database {}", db_path.display());

    let app = router(AppState::new(db_path)?);

    let listener = tokio::net::TcpListener::bind(&cfg.listen).await?;
    info!("rinventory listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
