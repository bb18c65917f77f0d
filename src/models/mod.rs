pub mod asset;
pub mod column;
pub mod note;

pub use asset::{Asset, AssetFields, AssetName, CellInput};
pub use column::AssetColumn;
pub use note::{Note, NoteInput};
