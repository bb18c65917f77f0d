use crate::models::{Asset, AssetColumn, Note};

/// Flat header + rows view of a table, shared by the CSV and XLSX writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn assets_sheet(assets: &[Asset]) -> Sheet {
    let mut headers = vec!["id".to_string()];
    headers.extend(AssetColumn::ALL.iter().map(|c| c.to_db_str().to_string()));

    let rows = assets
        .iter()
        .map(|a| {
            let mut row = Vec::with_capacity(AssetColumn::COUNT + 1);
            row.push(a.id.to_string());
            row.extend(a.fields.values().iter().cloned());
            row
        })
        .collect();

    Sheet { headers, rows }
}

pub fn notes_sheet(notes: &[Note]) -> Sheet {
    let headers = ["id", "date", "net_name", "note"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows = notes
        .iter()
        .map(|n| {
            vec![
                n.id.to_string(),
                n.date.clone(),
                n.net_name.clone(),
                n.note.clone(),
            ]
        })
        .collect();

    Sheet { headers, rows }
}
