//! Terminal and NDJSON rendering for the assetgen binary.

pub mod blocks;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod style;
pub mod terminal;
pub mod views;
