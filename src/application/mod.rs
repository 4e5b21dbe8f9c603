//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - One generation pass (discover, name, order, render, persist)
//! - `AssetWatcher` - Regenerates on filesystem changes
//! - `BuildHook` - Same rendering for host build systems, written by the host

pub mod build_hook;
pub mod generate;
pub mod watch;

pub use build_hook::{BuildHook, BuildOutput};
pub use generate::{plan_entries, GenerateOptions, GenerateUseCase, GenerationResult};
pub use watch::{AssetWatcher, Debouncer, EventCallback, EventFilter, WatchEvent, DEBOUNCE_MS};
