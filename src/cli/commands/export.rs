use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        notes,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        ExportLogic::export(&pool, *format, file, *notes, *force)?;
    }
    Ok(())
}
