use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::import::ImportLogic;
use crate::ui::messages::{success, warning};
use crate::utils::path::ensure_parent_dir;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force } = cmd {
        let db_path = Path::new(&cfg.database);
        ensure_parent_dir(db_path)?;

        let mut pool = DbPool::new(db_path)?;
        let summary = ImportLogic::run(&mut pool, Path::new(file), *force)?;

        success(format!(
            "Imported {} assets and {} notes from {}",
            summary.assets, summary.notes, file
        ));
        if summary.skipped_rows > 0 {
            warning(format!("{} blank rows skipped", summary.skipped_rows));
        }
    }
    Ok(())
}
