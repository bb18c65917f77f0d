use super::column::AssetColumn;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// A single incoming cell value.
///
/// Browsers send form inputs as strings, scripts tend to send numbers;
/// everything ends up stored as text.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellInput {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellInput {
    pub fn into_text(self) -> String {
        match self {
            CellInput::Text(s) => s,
            CellInput::Integer(i) => i.to_string(),
            CellInput::Float(f) => f.to_string(),
            CellInput::Bool(b) => b.to_string(),
            CellInput::Null => String::new(),
        }
    }
}

/// The 25 editable columns of an asset row, indexed by [`AssetColumn`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, CellInput>")]
pub struct AssetFields {
    values: [String; AssetColumn::COUNT],
}

impl AssetFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, col: AssetColumn) -> &str {
        &self.values[col.index()]
    }

    pub fn set(&mut self, col: AssetColumn, value: impl Into<String>) {
        self.values[col.index()] = value.into();
    }

    /// Builder-style setter, handy when assembling records by hand.
    pub fn with(mut self, col: AssetColumn, value: impl Into<String>) -> Self {
        self.set(col, value);
        self
    }

    /// Columns paired with their values, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetColumn, &str)> {
        AssetColumn::ALL
            .into_iter()
            .map(move |c| (c, self.values[c.index()].as_str()))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl From<BTreeMap<String, CellInput>> for AssetFields {
    /// Unknown keys (including `id`) are ignored, missing keys stay empty.
    fn from(map: BTreeMap<String, CellInput>) -> Self {
        let mut fields = AssetFields::default();
        for (key, value) in map {
            if let Some(col) = AssetColumn::from_db_str(&key) {
                fields.set(col, value.into_text());
            }
        }
        fields
    }
}

impl Serialize for AssetFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AssetColumn::COUNT))?;
        for (col, value) in self.iter() {
            map.serialize_entry(col.to_db_str(), value)?;
        }
        map.end()
    }
}

/// One tracked machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub id: i64,
    #[serde(flatten)]
    pub fields: AssetFields,
}

impl Asset {
    pub fn net_name(&self) -> &str {
        self.fields.get(AssetColumn::NetName)
    }

    pub fn rank(&self) -> &str {
        self.fields.get(AssetColumn::Rank)
    }
}

/// `(id, net_name)` pair used by the form selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetName {
    pub id: i64,
    pub net_name: String,
}
