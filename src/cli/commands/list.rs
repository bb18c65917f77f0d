use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{init_db, list_assets, list_notes};
use crate::errors::AppResult;
use crate::models::AssetColumn;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_cell, color_for_status};
use crate::utils::table::Table;

/// Columns shown by `list`; the full record is available via `export`.
const LIST_COLUMNS: [AssetColumn; 8] = [
    AssetColumn::Rank,
    AssetColumn::NetName,
    AssetColumn::Status,
    AssetColumn::FormFactor,
    AssetColumn::Vendor,
    AssetColumn::Model,
    AssetColumn::Location,
    AssetColumn::Os,
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { notes } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let table = if *notes {
            notes_table(&pool)?
        } else {
            assets_table(&pool)?
        };

        match table {
            Some(t) => print!("{}", t.render()),
            None if *notes => warning("No notes found."),
            None => warning("No assets found."),
        }
    }
    Ok(())
}

fn assets_table(pool: &DbPool) -> AppResult<Option<Table>> {
    let assets = list_assets(&pool.conn)?;
    if assets.is_empty() {
        return Ok(None);
    }

    let mut table = Table::new(
        std::iter::once("ID").chain(LIST_COLUMNS.iter().map(|c| c.label())),
    );
    for asset in &assets {
        let mut row = vec![asset.id.to_string()];
        row.extend(LIST_COLUMNS.iter().map(|c| {
            let value = asset.fields.get(*c);
            match c {
                AssetColumn::Status if !value.trim().is_empty() => {
                    format!("{}{}{}", color_for_status(value), value, RESET)
                }
                _ => paint(value),
            }
        }));
        table.add_row(row);
    }
    Ok(Some(table))
}

fn notes_table(pool: &DbPool) -> AppResult<Option<Table>> {
    let notes = list_notes(&pool.conn)?;
    if notes.is_empty() {
        return Ok(None);
    }

    let mut table = Table::new(["ID", "Date", "Net Name", "Note"]);
    for n in &notes {
        table.add_row(vec![
            n.id.to_string(),
            n.date.clone(),
            paint(&n.net_name),
            n.note.clone(),
        ]);
    }
    Ok(Some(table))
}

fn paint(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{}--{}", color_for_cell(value), RESET)
    } else {
        value.to_string()
    }
}
