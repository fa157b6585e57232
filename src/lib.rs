//! SnapLink Timing - Rust библиотека

pub mod error;
pub mod scheduler;
pub mod stores;
pub mod types;

pub use error::*;
pub use scheduler::*;
pub use types::*;

// Re-export для удобства
pub use scheduler::OptimalTimeScheduler;
pub use stores::{ActivityEventStore, PreferenceStore};
