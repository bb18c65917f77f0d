use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `assets` and `notes` tables when they are missing.
///
/// Every asset column is TEXT so values read back byte for byte; numeric
/// ordering of `rank` is done in the query.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS assets (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            status        TEXT,
            rank          TEXT,
            net_name      TEXT,
            form_factor   TEXT,
            vendor        TEXT,
            model         TEXT,
            screen1       TEXT,
            h_px1         TEXT,
            v_px1         TEXT,
            screen2       TEXT,
            h_px2         TEXT,
            v_px2         TEXT,
            cpu           TEXT,
            cores_threads TEXT,
            ram           TEXT,
            disk1         TEXT,
            disk2         TEXT,
            disk3         TEXT,
            disk4         TEXT,
            ext_disk      TEXT,
            location      TEXT,
            room          TEXT,
            os            TEXT,
            os_release    TEXT,
            oclp          TEXT
        );

        CREATE TABLE IF NOT EXISTS notes (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            date     TEXT,
            net_name TEXT,
            note     TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_assets_rank ON assets(rank);
        CREATE INDEX IF NOT EXISTS idx_notes_date ON notes(date);
        "#,
    )?;
    Ok(())
}

/// True when both tables exist.
pub fn is_initialized(conn: &Connection) -> AppResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('assets', 'notes')",
        [],
        |row| row.get(0),
    )?;
    Ok(count == 2)
}
