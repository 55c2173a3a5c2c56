//! Shared utilities for commands

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use srcfix::fixup::target;

/// How a rewritten target is committed to disk
#[derive(Debug, Default, Clone, Copy)]
pub struct WriteOptions {
    /// Print the diff instead of writing
    pub dry_run: bool,
    /// Copy the target aside before overwriting it
    pub backup: bool,
}

/// Write `new` over `path`, or print the diff against `old` in dry-run mode
pub fn commit(path: &Path, old: &str, new: &str, options: &WriteOptions) -> Result<()> {
    if options.dry_run {
        let diff = target::unified_diff(path, old, new);
        if diff.is_empty() {
            println!("{} {}: no differences", "[DRY-RUN]".blue(), path.display());
        } else {
            print!("{}", diff);
        }
        return Ok(());
    }

    if options.backup {
        let backup = target::backup_target(path)?;
        println!("{} {}", "Backup:".yellow(), backup.display());
    }

    target::write_target(path, new)?;
    Ok(())
}
