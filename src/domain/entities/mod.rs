//! Domain Entities

mod asset_entry;

pub use asset_entry::{join_root, normalize_root, AssetEntry};
