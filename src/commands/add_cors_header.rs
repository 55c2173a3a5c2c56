//! Add-cors-header command - Inject a header into the CORS `allowedHeaders` list

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils::{self, WriteOptions};
use srcfix::config;
use srcfix::fixup::{allowed_headers_preview, target, HeaderInjection};

/// Execute the add-cors-header command
///
/// The file is only written when at least one list gained the header.
pub fn execute(file: &Path, header: &str, after: &str, options: &WriteOptions) -> Result<()> {
    let content = target::read_target(file)
        .with_context(|| format!("Cannot update allowedHeaders in {}", file.display()))?;

    let outcome = HeaderInjection::new(header, after).apply(&content);

    for _ in 0..outcome.already_present {
        println!("{} already in allowedHeaders", header);
    }

    if outcome.changed() {
        utils::commit(file, &content, &outcome.content, options)?;
        if options.dry_run {
            println!("\n{}", "(DRY-RUN) No changes made.".blue());
        } else {
            println!(
                "{}",
                format!(
                    "Updated {} with {} in allowedHeaders",
                    file.display(),
                    header
                )
                .green()
            );
        }
    } else {
        println!(
            "{}",
            format!(
                "No changes made - pattern not found or {} already present",
                header
            )
            .yellow()
        );
    }

    println!("\nUpdated allowedHeaders section:");
    if let Some(section) = allowed_headers_preview(&outcome.content, config::PREVIEW_CHARS) {
        println!("{}", section);
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::MetadataExt;

    fn run(path: &Path, options: &WriteOptions) {
        execute(path, config::CORS_HEADER, config::CORS_ANCHOR_HEADER, options).unwrap();
    }

    #[test]
    fn test_execute_inserts_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.js");
        fs::write(&path, "const o = { allowedHeaders: ['Content-Type', 'Authorization'] };\n").unwrap();

        run(&path, &WriteOptions::default());

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "const o = { allowedHeaders: ['Content-Type',\n    'Cache-Control',\n    'Authorization'] };\n"
        );
    }

    #[test]
    fn test_execute_leaves_file_untouched_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.js");
        let content = "const o = { allowedHeaders: ['Content-Type', 'Cache-Control'] };\n";
        fs::write(&path, content).unwrap();
        let before = fs::metadata(&path).unwrap();

        run(&path, &WriteOptions::default());

        let after = fs::metadata(&path).unwrap();
        assert_eq!(after.ino(), before.ino());
        assert_eq!(after.modified().unwrap(), before.modified().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_execute_leaves_file_untouched_without_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.js");
        let content = "app.use(cors());\n";
        fs::write(&path, content).unwrap();
        let before = fs::metadata(&path).unwrap();

        run(&path, &WriteOptions::default());

        let after = fs::metadata(&path).unwrap();
        assert_eq!(after.ino(), before.ino());
        assert_eq!(after.modified().unwrap(), before.modified().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_execute_dry_run_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.js");
        let content = "const o = { allowedHeaders: ['Authorization'] };\n";
        fs::write(&path, content).unwrap();
        let before = fs::metadata(&path).unwrap().ino();

        let options = WriteOptions {
            dry_run: true,
            backup: false,
        };
        run(&path, &options);

        assert_eq!(fs::metadata(&path).unwrap().ino(), before);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}
