//! `dirclean` — prune empty directories from the command line.
//!
//! Repeatedly sweeps one or more directory trees, removing every directory
//! that holds neither files nor subdirectories, until a sweep removes nothing
//! or the pass limit is reached.

pub mod cli;
pub mod core;
pub mod input;
