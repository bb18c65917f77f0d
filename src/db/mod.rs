pub mod assets;
pub mod initialize;
pub mod notes;
pub mod pool;
pub mod stats;

pub use assets::{
    asset_names, count_assets, create_asset, delete_asset, get_asset, list_assets, update_asset,
    update_asset_cell, update_asset_cell_by_name,
};
pub use initialize::{init_db, is_initialized};
pub use notes::{count_notes, create_note, delete_note, get_note, list_notes, update_note};
pub use pool::DbPool;
