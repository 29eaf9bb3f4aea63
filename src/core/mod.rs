//! Filesystem side of `dirclean`: finding and removing empty directories.

pub mod clean;
pub mod config;
pub mod console;
pub mod error;
pub mod passes;

pub use clean::{Pruner, Sweep};
pub use config::{RunConfig, DEFAULT_PASSES};
pub use console::Console;
pub use error::CleanError;
pub use passes::{resolve_root, run, RunSummary, Termination};
