use std::fs;
use std::io;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::config::RunConfig;
use super::console::Console;
use super::error::CleanError;

/// What a single pruning call did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub removed: usize,
    pub declined: usize,
}

impl Sweep {
    pub fn removed_any(&self) -> bool {
        self.removed > 0
    }
}

impl AddAssign for Sweep {
    fn add_assign(&mut self, rhs: Self) {
        self.removed += rhs.removed;
        self.declined += rhs.declined;
    }
}

/// Immediate contents of a directory. Symlinks are never followed and land in `files`.
#[derive(Debug, Default)]
struct Listing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl Listing {
    fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

fn list_dir(path: &Path) -> Result<Listing, CleanError> {
    if !path.is_dir() {
        return Err(CleanError::DirectoryNotFound(path.to_path_buf()));
    }

    let mut listing = Listing::default();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| {
            if source.depth() == 0 || source.path() == Some(path) {
                CleanError::DirectoryNotFound(path.to_path_buf())
            } else {
                CleanError::List {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        if entry.file_type().is_dir() {
            listing.dirs.push(entry.into_path());
        } else {
            listing.files.push(entry.into_path());
        }
    }

    Ok(listing)
}

/// Remove a directory that is expected to be empty. Never recursive.
fn remove_empty_dir(path: &Path) -> Result<(), CleanError> {
    fs::remove_dir(path).map_err(|source| match source.kind() {
        io::ErrorKind::DirectoryNotEmpty => CleanError::DirectoryNotEmpty(path.to_path_buf()),
        io::ErrorKind::NotFound => CleanError::DirectoryNotFound(path.to_path_buf()),
        _ => CleanError::Remove {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Depth-first removal of empty directories, one pass at a time.
pub struct Pruner<'a, C: Console> {
    config: &'a RunConfig,
    console: &'a mut C,
}

impl<'a, C: Console> Pruner<'a, C> {
    pub fn new(config: &'a RunConfig, console: &'a mut C) -> Self {
        Self { config, console }
    }

    /// Remove `path` if it is empty, otherwise recurse into its subdirectories.
    ///
    /// A directory that only becomes empty because its children were removed
    /// during this call is left alone; the next pass picks it up.
    pub fn clean(&mut self, path: &Path) -> Result<Sweep, CleanError> {
        let listing = list_dir(path)?;
        debug!(
            path = %path.display(),
            files = listing.files.len(),
            dirs = listing.dirs.len(),
            "visiting"
        );

        if listing.is_empty() {
            return self.remove(path);
        }

        self.clean_children(&listing)
    }

    /// Like [`Pruner::clean`], but `root` itself is never removed.
    pub fn sweep_root(&mut self, root: &Path) -> Result<Sweep, CleanError> {
        let listing = list_dir(root)?;
        self.clean_children(&listing)
    }

    fn clean_children(&mut self, listing: &Listing) -> Result<Sweep, CleanError> {
        let mut sweep = Sweep::default();
        for dir in &listing.dirs {
            sweep += self.clean(dir)?;
        }
        Ok(sweep)
    }

    fn remove(&mut self, path: &Path) -> Result<Sweep, CleanError> {
        if self.config.confirm {
            let prompt = format!("{} is empty. Remove?", path.display());
            if !self.console.confirm(&prompt)? {
                debug!(path = %path.display(), "removal declined");
                return Ok(Sweep {
                    removed: 0,
                    declined: 1,
                });
            }
            self.console.announce_removal(path);
        } else if self.config.verbose {
            self.console.announce_removal(path);
        }

        remove_empty_dir(path)?;
        info!(path = %path.display(), "removed empty directory");

        Ok(Sweep {
            removed: 1,
            declined: 0,
        })
    }
}
