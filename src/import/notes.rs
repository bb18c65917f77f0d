//! Notes block parser.
//!
//! Below the `Notes` sentinel the sheet has no schema: a row either opens a
//! new date (third cell is a date, fourth cell an optional inline note) or
//! continues the current date (third cell an optional name, fourth cell the
//! text). The parser is a two-state machine fed one row at a time.

use chrono::NaiveDate;

/// Column holding the date marker or the name.
const MARKER_COL: usize = 2;
/// Column holding the note text.
const TEXT_COL: usize = 3;

/// A note ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub date: String,
    pub net_name: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoteState {
    #[default]
    AwaitingDate,
    InNoteBlock {
        date: String,
    },
}

/// Interpret a cell as a date marker, normalized to `YYYY-MM-DD`.
///
/// Accepts an ISO prefix (`2024-03-05`, `2024-03-05 00:00:00`), `YYYY/MM/DD`
/// and `MM/DD/YYYY`.
pub fn parse_marker_date(cell: &str) -> Option<String> {
    let s = cell.trim();

    if s.len() >= 10
        && s.is_char_boundary(10)
        && let Ok(d) = NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d")
    {
        return Some(d.format("%Y-%m-%d").to_string());
    }

    ["%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.trim()).unwrap_or("")
}

#[derive(Debug, Default)]
pub struct NoteParser {
    state: NoteState,
}

impl NoteParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NoteState {
        &self.state
    }

    /// Feed one row, returning the note it produces, if any.
    pub fn step(&mut self, row: &[String]) -> Option<NoteDraft> {
        let marker = cell(row, MARKER_COL);
        let text = cell(row, TEXT_COL);

        if marker.is_empty() && text.is_empty() {
            return None;
        }

        if let Some(date) = parse_marker_date(marker) {
            self.state = NoteState::InNoteBlock { date: date.clone() };
            return (!text.is_empty()).then(|| NoteDraft {
                date,
                net_name: String::new(),
                note: text.to_string(),
            });
        }

        let NoteState::InNoteBlock { date } = &self.state else {
            // continuation before any date: nothing to attach it to
            return None;
        };

        let (net_name, note) = if text.is_empty() {
            ("", marker)
        } else {
            (marker, text)
        };

        Some(NoteDraft {
            date: date.clone(),
            net_name: net_name.to_string(),
            note: note.to_string(),
        })
    }
}

/// Lazy adapter turning a fallible row stream into a fallible note stream.
pub struct NoteRows<I> {
    rows: I,
    parser: NoteParser,
}

impl<I> NoteRows<I> {
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            parser: NoteParser::new(),
        }
    }
}

impl<I, E> Iterator for NoteRows<I>
where
    I: Iterator<Item = Result<Vec<String>, E>>,
{
    type Item = Result<NoteDraft, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.rows.next()? {
                Ok(row) => {
                    if let Some(draft) = self.parser.step(&row) {
                        return Some(Ok(draft));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(marker: &str, text: &str) -> Vec<String> {
        vec![String::new(), String::new(), marker.to_string(), text.to_string()]
    }

    fn draft(date: &str, name: &str, note: &str) -> NoteDraft {
        NoteDraft {
            date: date.into(),
            net_name: name.into(),
            note: note.into(),
        }
    }

    #[test]
    fn recognizes_date_markers() {
        assert_eq!(parse_marker_date("2024-03-05"), Some("2024-03-05".into()));
        assert_eq!(parse_marker_date(" 2024-03-05 00:00:00"), Some("2024-03-05".into()));
        assert_eq!(parse_marker_date("2024/3/5"), Some("2024-03-05".into()));
        assert_eq!(parse_marker_date("03/05/2024"), Some("2024-03-05".into()));
        assert_eq!(parse_marker_date("srv1"), None);
        assert_eq!(parse_marker_date("2024-13-45"), None);
        assert_eq!(parse_marker_date(""), None);
    }

    #[test]
    fn walks_a_notes_block() {
        let rows = vec![
            row("orphan", "dropped: no date yet"),
            row("2024-01-01", ""),
            row("srv1", "replaced disk"),
            row("general remark", ""),
            row("", ""),
            row("2024-03-05", "inline note"),
            row("", "text without a name"),
        ];

        let mut p = NoteParser::new();
        let out: Vec<NoteDraft> = rows.iter().filter_map(|r| p.step(r)).collect();

        assert_eq!(
            out,
            vec![
                draft("2024-01-01", "srv1", "replaced disk"),
                draft("2024-01-01", "", "general remark"),
                draft("2024-03-05", "", "inline note"),
                draft("2024-03-05", "", "text without a name"),
            ]
        );
        assert_eq!(
            p.state(),
            &NoteState::InNoteBlock {
                date: "2024-03-05".into()
            }
        );
    }

    #[test]
    fn short_rows_are_tolerated() {
        let mut p = NoteParser::new();
        assert_eq!(p.step(&["Notes".to_string()]), None);
        assert_eq!(p.state(), &NoteState::AwaitingDate);
    }

    #[test]
    fn iterator_adapter_propagates_errors() {
        let rows: Vec<Result<Vec<String>, &str>> = vec![
            Ok(row("2024-01-01", "a")),
            Err("broken record"),
            Ok(row("srv2", "b")),
        ];
        let out: Vec<_> = NoteRows::new(rows.into_iter()).collect();

        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Ok(draft("2024-01-01", "", "a")));
        assert_eq!(out[1], Err("broken record"));
        assert_eq!(out[2], Ok(draft("2024-01-01", "srv2", "b")));
    }
}
