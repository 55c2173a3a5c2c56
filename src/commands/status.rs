//! Status command - Show which patches still apply

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};

use srcfix::fixup::{target, CommentFix, HeaderInjection, PatchStatus};

/// Status of one patch
#[derive(Debug, Serialize)]
pub struct StatusEntry {
    pub patch: &'static str,
    pub target: PathBuf,
    pub status: PatchStatus,
}

/// Execute the status command
pub fn execute(component: &Path, server_entry: &Path, json: bool) -> Result<()> {
    let entries = collect(component, server_entry)?;

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize status")?;
        println!("{}", out);
    } else {
        println!("{}", format_table(&entries));
    }

    Ok(())
}

/// Evaluate both patches against their targets without writing anything
pub fn collect(component: &Path, server_entry: &Path) -> Result<Vec<StatusEntry>> {
    let component_content = read_optional(component)?;
    let server_content = read_optional(server_entry)?;

    Ok(vec![
        StatusEntry {
            patch: "fix-comments",
            target: component.to_path_buf(),
            status: PatchStatus::of_comment_fix(
                &CommentFix::default(),
                component_content.as_deref(),
            ),
        },
        StatusEntry {
            patch: "add-cors-header",
            target: server_entry.to_path_buf(),
            status: PatchStatus::of_injection(
                &HeaderInjection::default(),
                server_content.as_deref(),
            ),
        },
    ])
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(target::read_target(path)?))
}

fn format_table(entries: &[StatusEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Patch"), Cell::new("Target"), Cell::new("Status")]);

    for entry in entries {
        let color = match entry.status {
            PatchStatus::Pending => Color::Yellow,
            PatchStatus::Applied => Color::Green,
            PatchStatus::MissingTarget | PatchStatus::NoMatch => Color::Red,
        };
        table.add_row(vec![
            Cell::new(entry.patch),
            Cell::new(entry.target.display()),
            Cell::new(entry.status).fg(color),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_missing_targets() {
        let dir = tempfile::tempdir().unwrap();
        let entries = collect(&dir.path().join("a.tsx"), &dir.path().join("index.js")).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|e| e.status == PatchStatus::MissingTarget));
    }

    #[test]
    fn test_collect_pending_header() {
        let dir = tempfile::tempdir().unwrap();
        let server = dir.path().join("index.js");
        fs::write(&server, "const o = { allowedHeaders: ['Content-Type'] };\n").unwrap();

        let entries = collect(&dir.path().join("a.tsx"), &server).unwrap();
        assert_eq!(entries[1].status, PatchStatus::Pending);
    }

    #[test]
    fn test_table_lists_patches() {
        let entries = vec![StatusEntry {
            patch: "add-cors-header",
            target: PathBuf::from("index.js"),
            status: PatchStatus::Applied,
        }];
        let table = format_table(&entries);
        assert!(table.contains("add-cors-header"));
        assert!(table.contains("applied"));
    }
}
