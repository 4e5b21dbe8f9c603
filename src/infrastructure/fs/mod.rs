//! File system implementations

mod local;
mod walk;

pub use local::LocalOutputWriter;
pub use walk::{list_files, to_forward_slashes};
