//! Server-rendered pages. Pure read projections; edits go through `/api`.

use super::AppState;
use crate::db;
use crate::errors::AppResult;
use crate::models::{Asset, AssetColumn, AssetName, Note};
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use serde::Serialize;
use tera::Context;

#[derive(Debug, Serialize)]
struct ColumnView {
    name: &'static str,
    label: &'static str,
    numeric: bool,
}

#[derive(Debug, Serialize)]
struct CellView<'a> {
    column: &'static str,
    label: &'static str,
    numeric: bool,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct RowView<'a> {
    id: i64,
    cells: Vec<CellView<'a>>,
}

fn columns() -> Vec<ColumnView> {
    AssetColumn::ALL
        .iter()
        .map(|c| ColumnView {
            name: c.to_db_str(),
            label: c.label(),
            numeric: c.is_numeric(),
        })
        .collect()
}

fn row_view(asset: &Asset) -> RowView<'_> {
    RowView {
        id: asset.id,
        cells: asset
            .fields
            .iter()
            .map(|(c, v)| CellView {
                column: c.to_db_str(),
                label: c.label(),
                numeric: c.is_numeric(),
                value: v,
            })
            .collect(),
    }
}

fn render(state: &AppState, name: &str, ctx: &Context) -> AppResult<Html<String>> {
    Ok(Html(state.templates.render(name, ctx)?))
}

pub async fn index() -> Redirect {
    Redirect::to("/table")
}

/// Every asset, every column, rank order.
pub async fn table(State(state): State<AppState>) -> AppResult<Html<String>> {
    let assets = state.with_conn(|conn| db::list_assets(conn)).await?;

    let rows: Vec<RowView> = assets.iter().map(row_view).collect();
    let mut ctx = Context::new();
    ctx.insert("page", "table");
    ctx.insert("columns", &columns());
    ctx.insert("rows", &rows);

    render(&state, "table.html", &ctx)
}

pub async fn form_first(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(state, None).await
}

pub async fn form(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Html<String>> {
    render_form(state, Some(id)).await
}

/// Single asset form. Without an id the first asset by rank is shown; an
/// unknown id renders the selector with an empty form.
async fn render_form(state: AppState, id: Option<i64>) -> AppResult<Html<String>> {
    let (names, asset): (Vec<AssetName>, Option<Asset>) = state
        .with_conn(move |conn| {
            let names = db::asset_names(conn)?;
            let target = id.or_else(|| names.first().map(|n| n.id));
            let asset = match target {
                Some(id) => db::get_asset(conn, id)?,
                None => None,
            };
            Ok((names, asset))
        })
        .await?;

    let mut ctx = Context::new();
    ctx.insert("page", "form");
    ctx.insert("assets", &names);
    ctx.insert("current_id", &asset.as_ref().map(|a| a.id).or(id));
    ctx.insert("columns", &columns());
    ctx.insert("asset", &asset.as_ref().map(row_view));

    render(&state, "form.html", &ctx)
}

/// All notes, newest first.
pub async fn notes(State(state): State<AppState>) -> AppResult<Html<String>> {
    let (notes, names): (Vec<Note>, Vec<AssetName>) = state
        .with_conn(|conn| Ok((db::list_notes(conn)?, db::asset_names(conn)?)))
        .await?;

    let mut ctx = Context::new();
    ctx.insert("page", "notes");
    ctx.insert("notes", &notes);
    ctx.insert("assets", &names);

    render(&state, "notes.html", &ctx)
}
