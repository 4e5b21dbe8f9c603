//! Watch Use Case
//!
//! Keeps the generated output current while files change:
//! - Filesystem monitoring (via `notify`), one recursive subscription per root
//! - Noise filtering (hidden and temp files, the output itself, excludes)
//! - Debouncing (300ms, restarted by every accepted change)
//! - Full regeneration through [`GenerateUseCase`](crate::application::GenerateUseCase)
//!
//! ## Usage
//!
//! ```ignore
//! let mut watcher = AssetWatcher::local(".", config, |event| { ... });
//! watcher.start()?;
//! // ... until interrupted
//! watcher.stop();
//! ```

mod debounce;
mod event;
mod filter;
mod use_case;


pub use debounce::{Debouncer, DEBOUNCE_MS};
pub use event::WatchEvent;
pub use filter::EventFilter;
pub use use_case::{AssetWatcher, EventCallback};
