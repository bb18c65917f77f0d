use crate::db::assets::value_to_text;
use crate::errors::AppResult;
use crate::models::{Note, NoteInput};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        date: value_to_text(row.get_ref("date")?),
        net_name: value_to_text(row.get_ref("net_name")?),
        note: value_to_text(row.get_ref("note")?),
    })
}

/// All notes, most recent date first.
pub fn list_notes(conn: &Connection) -> AppResult<Vec<Note>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, net_name, note FROM notes
         ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_note(conn: &Connection, id: i64) -> AppResult<Option<Note>> {
    let note = conn
        .query_row(
            "SELECT id, date, net_name, note FROM notes WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(note)
}

pub fn create_note(conn: &Connection, input: &NoteInput) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO notes (date, net_name, note) VALUES (?1, ?2, ?3)",
        params![input.date, input.net_name(), input.note],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite a note. A missing id updates nothing and is not an error.
pub fn update_note(conn: &Connection, id: i64, input: &NoteInput) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE notes SET date = ?1, net_name = ?2, note = ?3 WHERE id = ?4",
        params![input.date, input.net_name(), input.note, id],
    )?;
    Ok(n)
}

pub fn delete_note(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM notes WHERE id = ?1", [id])?)
}

pub fn count_notes(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?)
}
