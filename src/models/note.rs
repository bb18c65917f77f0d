use serde::{Deserialize, Serialize};

/// One dated free-text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: i64,
    /// `YYYY-MM-DD` by convention; stored as given.
    pub date: String,
    /// Soft reference to an asset's `net_name`, empty for general notes.
    pub net_name: String,
    pub note: String,
}

/// Body of a note create/update request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteInput {
    pub date: String,
    #[serde(default)]
    pub net_name: Option<String>,
    pub note: String,
}

impl NoteInput {
    pub fn new(date: impl Into<String>, net_name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            net_name: Some(net_name.into()),
            note: note.into(),
        }
    }

    pub fn net_name(&self) -> &str {
        self.net_name.as_deref().unwrap_or_default()
    }
}
