use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::clean::{Pruner, Sweep};
use super::config::RunConfig;
use super::console::Console;
use super::error::CleanError;

/// Why the pass loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last pass removed nothing.
    Converged,
    /// Every allowed pass ran and the last one still removed something.
    BudgetExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passes_run: u32,
    pub removed: usize,
    pub declined: usize,
    pub termination: Termination,
}

impl RunSummary {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    pub fn message(&self) -> String {
        match self.termination {
            Termination::Converged => format!("Only {} pass(es) needed...", self.passes_run),
            Termination::BudgetExhausted => format!(
                "All {} passes required. There may be some empty directories remaining...",
                self.passes_run
            ),
        }
    }
}

/// Locate a target directory: first relative to `cwd`, then as given.
pub fn resolve_root(cwd: &Path, root: &Path) -> Option<PathBuf> {
    let joined = cwd.join(root);
    if joined.is_dir() {
        Some(joined)
    } else if root.is_dir() {
        Some(root.to_path_buf())
    } else {
        None
    }
}

/// Sweep `roots` (or `cwd` when there are none) until a pass removes nothing
/// or `config.passes` passes have run.
pub fn run<C: Console>(
    roots: &[PathBuf],
    cwd: &Path,
    config: &RunConfig,
    console: &mut C,
) -> Result<RunSummary, CleanError> {
    if config.passes == 0 {
        return Err(CleanError::InvalidPassCount);
    }

    let mut summary = RunSummary {
        passes_run: 0,
        removed: 0,
        declined: 0,
        termination: Termination::BudgetExhausted,
    };
    let mut removed_last = true;

    while summary.passes_run < config.passes && removed_last {
        let pass = summary.passes_run + 1;
        let sweep = run_pass(pass, roots, cwd, config, console)?;
        debug!(pass, removed = sweep.removed, declined = sweep.declined, "pass finished");

        summary.passes_run = pass;
        summary.removed += sweep.removed;
        summary.declined += sweep.declined;
        removed_last = sweep.removed_any();
    }

    if !removed_last {
        summary.termination = Termination::Converged;
    }
    Ok(summary)
}

fn run_pass<C: Console>(
    pass: u32,
    roots: &[PathBuf],
    cwd: &Path,
    config: &RunConfig,
    console: &mut C,
) -> Result<Sweep, CleanError> {
    if roots.is_empty() {
        if config.verbose {
            console.say(&format!("PASS #{pass}: Cleaning current directory..."));
        }
        return Pruner::new(config, console).sweep_root(cwd);
    }

    let mut sweep = Sweep::default();
    for root in roots {
        let Some(path) = resolve_root(cwd, root) else {
            warn!(root = %root.display(), "skipping target that is not a directory");
            if config.verbose {
                console.say(&format!("{} is not a directory...", root.display()));
            }
            continue;
        };
        if config.verbose {
            console.say(&format!("PASS #{pass}: Cleaning directory {}...", path.display()));
        }
        sweep += Pruner::new(config, console).sweep_root(&path)?;
    }
    Ok(sweep)
}
