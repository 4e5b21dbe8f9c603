//! Domain Layer
//!
//! Pure generation logic without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Asset entries discovered during a run
//! - `value_objects/` - Immutable value types (hash, naming, exclude patterns)
//! - `services/` - Identifier building, collision resolution, rendering
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
