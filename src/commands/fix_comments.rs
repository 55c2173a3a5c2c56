//! Fix-comments command - Drop the duplicated comment and re-indent `apiUrl`

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;

use super::utils::{self, WriteOptions};
use srcfix::fixup::{target, CommentFix};

/// Execute the fix-comments command
///
/// The file is written back even when the fix changes nothing.
pub fn execute(file: &Path, options: &WriteOptions) -> Result<()> {
    let content = target::read_target(file)
        .with_context(|| format!("Cannot fix comments in {}", file.display()))?;

    let outcome = CommentFix::default().apply(&content);
    info!(
        removed_duplicates = outcome.removed_duplicates,
        reindented = outcome.reindented,
        "comment fix applied"
    );

    utils::commit(file, &content, &outcome.content, options)?;

    if options.dry_run {
        println!("\n{}", "(DRY-RUN) No changes made.".blue());
    } else {
        println!("{}", "Fixed duplicate comments and indentation".green());
    }

    Ok(())
}
