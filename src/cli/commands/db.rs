use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{is_initialized, stats};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RED, RESET};
use std::path::Path;

/// Maintenance on the inventory database. Never creates the schema: a
/// missing or empty file is reported and left alone.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if !Path::new(&cfg.database).exists() {
            warning(format!(
                "No database at {}; run `rinventory init` first",
                cfg.database
            ));
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        if !is_initialized(&pool.conn)? {
            warning(format!(
                "{} has no inventory tables; run `rinventory init` first",
                cfg.database
            ));
            return Ok(());
        }

        if *show_info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            info("Running integrity check…");
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }
        }

        if *vacuum {
            let before = std::fs::metadata(&cfg.database).map(|m| m.len()).unwrap_or(0);
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            let after = std::fs::metadata(&cfg.database).map(|m| m.len()).unwrap_or(0);
            success(format!("Vacuum completed ({} → {} bytes).", before, after));
        }
    }
    Ok(())
}
