//! OutputWriter port - where rendered source ends up
//!
//! The CLI pipeline persists to the local disk; a host build system supplies
//! its own writer for the reactive build hook.

use std::path::Path;

use crate::error::AssetGenResult;

pub trait OutputWriter {
    /// Current content at `path`, or `None` if nothing has been written yet.
    ///
    /// Writers that cannot read back (host build outputs) keep the default.
    fn existing(&self, _path: &Path) -> AssetGenResult<Option<String>> {
        Ok(None)
    }

    /// Ensure the parent directory of `path` exists.
    fn prepare(&self, _path: &Path) -> AssetGenResult<()> {
        Ok(())
    }

    /// Replace the content at `path`.
    fn write(&self, path: &Path, content: &str) -> AssetGenResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_writer_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn OutputWriter) {}
    }
}
