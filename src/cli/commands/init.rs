use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use tracing::debug;

/// Handle the `init` command
///
/// Creates the config directory and file (unless running with `--test`)
/// and the SQLite schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing rInventory…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;
    debug!(path = %db_path.display(), "schema ready");

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
