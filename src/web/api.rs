//! JSON endpoints under `/api`.
//!
//! Every mutating call commits on its own connection before responding.
//! Updates and deletes on a missing id answer `{"success": true}`.

use super::AppState;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::models::{Asset, AssetColumn, AssetFields, CellInput, Note, NoteInput};
use axum::extract::{FromRequest, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiOk {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ApiOk {
    fn done() -> Json<Self> {
        Json(Self {
            success: true,
            id: None,
        })
    }

    fn created(id: i64) -> Json<Self> {
        Json(Self {
            success: true,
            id: Some(id),
        })
    }
}

/// JSON body extractor whose rejections go through [`AppError`], so a
/// malformed body answers `{"success": false, "error": ...}` like any other
/// failure.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Body of `POST /api/cell`.
#[derive(Debug, Clone, Deserialize)]
pub struct CellUpdate {
    pub id: i64,
    pub column: String,
    pub value: CellInput,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/assets", get(list_assets))
        .route("/api/asset", post(create_asset))
        .route(
            "/api/asset/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
        .route("/api/cell", post(update_cell))
        .route("/api/notes", get(list_notes))
        .route("/api/note", post(create_note))
        .route(
            "/api/note/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ── Assets ──────────────────────────────────────────────────────────

async fn list_assets(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.with_conn(|conn| db::list_assets(conn)).await?;
    Ok(Json(assets))
}

async fn get_asset(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Asset>> {
    let asset = state.with_conn(move |conn| db::get_asset(conn, id)).await?;
    asset.map(Json).ok_or(AppError::AssetNotFound(id))
}

async fn create_asset(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<AssetFields>,
) -> AppResult<Json<ApiOk>> {
    let id = state
        .with_conn(move |conn| db::create_asset(conn, &fields))
        .await?;
    info!(id, "asset created");
    Ok(ApiOk::created(id))
}

async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(fields): ApiJson<AssetFields>,
) -> AppResult<Json<ApiOk>> {
    let changed = state
        .with_conn(move |conn| db::update_asset(conn, id, &fields))
        .await?;
    info!(id, changed, "asset updated");
    Ok(ApiOk::done())
}

async fn delete_asset(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<ApiOk>> {
    let removed = state.with_conn(move |conn| db::delete_asset(conn, id)).await?;
    info!(id, removed, "asset deleted");
    Ok(ApiOk::done())
}

async fn update_cell(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CellUpdate>,
) -> AppResult<Json<ApiOk>> {
    // reject before touching the store
    let column: AssetColumn = req.column.parse()?;
    let id = req.id;
    let value = req.value.into_text();

    debug!(id, %column, "cell update");
    let changed = state
        .with_conn(move |conn| db::update_asset_cell(conn, id, column, &value))
        .await?;
    info!(id, %column, changed, "asset cell updated");
    Ok(ApiOk::done())
}

// ── Notes ───────────────────────────────────────────────────────────

async fn list_notes(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    let notes = state.with_conn(|conn| db::list_notes(conn)).await?;
    Ok(Json(notes))
}

async fn get_note(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Note>> {
    let note = state.with_conn(move |conn| db::get_note(conn, id)).await?;
    note.map(Json).ok_or(AppError::NoteNotFound(id))
}

async fn create_note(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NoteInput>,
) -> AppResult<Json<ApiOk>> {
    let id = state
        .with_conn(move |conn| db::create_note(conn, &input))
        .await?;
    info!(id, "note created");
    Ok(ApiOk::created(id))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<NoteInput>,
) -> AppResult<Json<ApiOk>> {
    let changed = state
        .with_conn(move |conn| db::update_note(conn, id, &input))
        .await?;
    info!(id, changed, "note updated");
    Ok(ApiOk::done())
}

async fn delete_note(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<ApiOk>> {
    let removed = state.with_conn(move |conn| db::delete_note(conn, id)).await?;
    info!(id, removed, "note deleted");
    Ok(ApiOk::done())
}
