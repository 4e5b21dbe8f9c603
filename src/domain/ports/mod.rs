//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod manifest_checker;
pub mod output_writer;

pub use manifest_checker::{ManifestChecker, ManifestValidation};
pub use output_writer::OutputWriter;
