use crate::db::{self, DbPool};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{assets_sheet, notes_sheet};
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every asset (or every note when `notes` is set) to `file`.
    ///
    /// Rows come out in the same order as the views: assets by rank, notes
    /// newest first.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        notes: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;
        crate::utils::path::ensure_parent_dir(path)?;

        let count = if notes {
            let items = db::list_notes(&pool.conn)?;
            match format {
                ExportFormat::Json => export_json(&items, path)?,
                ExportFormat::Csv => export_csv(&notes_sheet(&items), path)?,
                ExportFormat::Xlsx => export_xlsx(&notes_sheet(&items), "Notes", path)?,
            }
            items.len()
        } else {
            let items = db::list_assets(&pool.conn)?;
            match format {
                ExportFormat::Json => export_json(&items, path)?,
                ExportFormat::Csv => export_csv(&assets_sheet(&items), path)?,
                ExportFormat::Xlsx => export_xlsx(&assets_sheet(&items), "Assets", path)?,
            }
            items.len()
        };

        if count == 0 {
            warning("Nothing to export: the table is empty.");
        }

        info!(
            format = format.as_str(),
            rows = count,
            file = %path.display(),
            "export written"
        );
        Ok(count)
    }
}
