use crate::errors::AppResult;
use crate::models::{Asset, AssetColumn, AssetFields, AssetName};
use rusqlite::types::{ToSql, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Render a stored SQLite value as the text the application works with.
///
/// Databases created before every column was TEXT may still hold REAL
/// values; an integral one comes back without a trailing `.0`.
pub(crate) fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}

fn column_list() -> String {
    AssetColumn::ALL
        .iter()
        .map(|c| c.to_db_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numeric rank first, blank ranks last, ties by id.
const RANK_ORDER: &str = "ORDER BY (rank IS NULL OR rank = '') ASC, CAST(rank AS REAL) ASC, rank ASC, id ASC";

fn select_sql(tail: &str) -> String {
    format!("SELECT id, {} FROM assets {}", column_list(), tail)
}

pub fn map_row(row: &Row) -> rusqlite::Result<Asset> {
    let mut fields = AssetFields::new();
    for col in AssetColumn::ALL {
        // column 0 is `id`
        fields.set(col, value_to_text(row.get_ref(col.index() + 1)?));
    }
    Ok(Asset {
        id: row.get(0)?,
        fields,
    })
}

/// All assets ordered by rank (ties by id).
pub fn list_assets(conn: &Connection) -> AppResult<Vec<Asset>> {
    let mut stmt = conn.prepare(&select_sql(RANK_ORDER))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_asset(conn: &Connection, id: i64) -> AppResult<Option<Asset>> {
    let asset = conn
        .query_row(&select_sql("WHERE id = ?1"), [id], map_row)
        .optional()?;
    Ok(asset)
}

/// `(id, net_name)` for every asset, in rank order.
pub fn asset_names(conn: &Connection) -> AppResult<Vec<AssetName>> {
    let mut stmt = conn.prepare(&format!("SELECT id, net_name FROM assets {RANK_ORDER}"))?;
    let rows = stmt.query_map([], |row| {
        Ok(AssetName {
            id: row.get(0)?,
            net_name: value_to_text(row.get_ref(1)?),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a row with every column from `fields` and return the new id.
pub fn create_asset(conn: &Connection, fields: &AssetFields) -> AppResult<i64> {
    let placeholders = (1..=AssetColumn::COUNT)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("INSERT INTO assets ({}) VALUES ({})", column_list(), placeholders);

    conn.execute(&sql, rusqlite::params_from_iter(fields.values()))?;
    Ok(conn.last_insert_rowid())
}

/// Full replace of every column. A missing id updates nothing and is not an error.
pub fn update_asset(conn: &Connection, id: i64, fields: &AssetFields) -> AppResult<usize> {
    let set_clause = AssetColumn::ALL
        .iter()
        .map(|c| format!("{} = ?{}", c.to_db_str(), c.index() + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE assets SET {} WHERE id = ?{}",
        set_clause,
        AssetColumn::COUNT + 1
    );

    let mut values: Vec<&dyn ToSql> = fields.values().iter().map(|v| v as &dyn ToSql).collect();
    values.push(&id);

    Ok(conn.execute(&sql, values.as_slice())?)
}

/// Update a single cell. Only the typed column reaches the statement text.
pub fn update_asset_cell(
    conn: &Connection,
    id: i64,
    column: AssetColumn,
    value: &str,
) -> AppResult<usize> {
    let sql = format!("UPDATE assets SET {} = ?1 WHERE id = ?2", column.to_db_str());
    Ok(conn.execute(&sql, params![value, id])?)
}

/// Parse `column` against the whitelist, then update the cell.
pub fn update_asset_cell_by_name(
    conn: &Connection,
    id: i64,
    column: &str,
    value: &str,
) -> AppResult<usize> {
    let column: AssetColumn = column.parse()?;
    update_asset_cell(conn, id, column, value)
}

/// Remove an asset. Deleting a missing id is a no-op.
pub fn delete_asset(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM assets WHERE id = ?1", [id])?)
}

pub fn count_assets(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM assets", [], |row| row.get(0))?)
}
