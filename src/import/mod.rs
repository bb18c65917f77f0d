//! One-shot spreadsheet importer.
//!
//! Reads the inventory sheet (saved as CSV), splits it at the `Notes`
//! sentinel row and writes assets and notes in a single transaction. The
//! server never calls into this module.

pub mod header;
pub mod notes;

use crate::db::{self, DbPool};
use crate::errors::{AppError, AppResult};
use crate::models::{AssetColumn, AssetFields, NoteInput};
use header::map_headers;
use notes::NoteRows;
use std::path::Path;
use tracing::{debug, info};

pub use notes::{NoteDraft, NoteParser, NoteState};

/// First cell of the row separating assets from notes.
pub const NOTES_SENTINEL: &str = "Notes";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub assets: usize,
    pub notes: usize,
    pub skipped_rows: usize,
}

/// Render integral decimals the way they were typed ("3.0" → "3").
pub(crate) fn normalize_value(raw: &str) -> String {
    let v = raw.trim();
    if v.contains('.')
        && let Ok(f) = v.parse::<f64>()
        && f.is_finite()
        && f.fract() == 0.0
        && f.abs() < 1e15
    {
        return (f as i64).to_string();
    }
    v.to_string()
}

fn is_sentinel(row: &[String]) -> bool {
    row.first().map(|c| c.trim() == NOTES_SENTINEL).unwrap_or(false)
}

/// Build the asset fields for one sheet row, or `None` for a blank row.
///
/// A row is blank when its net name is empty; the net name is looked up
/// through the header mapping, falling back to the third cell.
pub fn asset_from_row(mapping: &[Option<AssetColumn>], row: &[String]) -> Option<AssetFields> {
    let name_idx = mapping
        .iter()
        .position(|c| *c == Some(AssetColumn::NetName))
        .unwrap_or(2);

    if row.get(name_idx).map(|s| s.trim().is_empty()).unwrap_or(true) {
        return None;
    }

    let mut fields = AssetFields::new();
    for (idx, col) in mapping.iter().enumerate() {
        if let (Some(col), Some(value)) = (col, row.get(idx)) {
            fields.set(*col, normalize_value(value));
        }
    }
    Some(fields)
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import `csv_path` into the database behind `pool`.
    ///
    /// Refuses to touch a non-empty database unless `force` is set, in which
    /// case both tables are emptied inside the same transaction.
    pub fn run(pool: &mut DbPool, csv_path: &Path, force: bool) -> AppResult<ImportSummary> {
        db::init_db(&pool.conn)?;

        let existing = db::count_assets(&pool.conn)? + db::count_notes(&pool.conn)?;
        if existing > 0 && !force {
            return Err(AppError::Import(format!(
                "database already contains {existing} rows; use --force to replace them"
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(csv_path)?;

        let mut rows = reader
            .records()
            .map(|r| r.map(|rec| rec.iter().map(str::to_string).collect::<Vec<String>>()));

        let headers = match rows.next() {
            Some(h) => h?,
            None => return Err(AppError::Import("the sheet is empty".into())),
        };
        let mapping = map_headers(&headers);
        if !mapping.contains(&Some(AssetColumn::NetName)) {
            return Err(AppError::Import("no 'Net Name' column found in header".into()));
        }
        debug!(?mapping, "header mapped");

        let tx = pool.conn.transaction()?;
        if force {
            tx.execute_batch("DELETE FROM assets; DELETE FROM notes;")?;
        }

        let mut summary = ImportSummary::default();

        // asset block: everything above the sentinel
        for row in rows.by_ref() {
            let row = row?;
            if is_sentinel(&row) {
                break;
            }
            match asset_from_row(&mapping, &row) {
                Some(fields) => {
                    db::create_asset(&tx, &fields)?;
                    summary.assets += 1;
                }
                None => summary.skipped_rows += 1,
            }
        }

        // notes block: everything below it
        for draft in NoteRows::new(rows) {
            let draft = draft?;
            let input = NoteInput::new(draft.date, draft.net_name, draft.note);
            db::create_note(&tx, &input)?;
            summary.notes += 1;
        }

        tx.commit()?;

        info!(
            assets = summary.assets,
            notes = summary.notes,
            file = %csv_path.display(),
            "spreadsheet imported"
        );
        Ok(summary)
    }
}
