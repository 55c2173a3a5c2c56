use std::fs;

use srcfix::fixup::{target, CommentFix, HeaderInjection, PatchStatus};

const SERVER_INDEX: &str = r#"const corsOptions = {
    origin: ['http://localhost:3000'],
    credentials: true,
    methods: ['GET', 'POST', 'PUT', 'DELETE', 'OPTIONS'],
    allowedHeaders: ['Content-Type', 'Authorization', 'X-Requested-With'],
};
app.use(cors(corsOptions));
"#;

fn dashboard_component() -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("import React, { useEffect, useState } from 'react';\n".to_string());
    while lines.len() < 41 {
        lines.push(format!("// filler {}\n", lines.len()));
    }
    lines.push("  useEffect(() => {\n".to_string()); // 41
    lines.push("    const load = async () => {\n".to_string()); // 42
    lines.push("      // Fetch employees\n".to_string()); // 43
    lines.push("      // Fetch employees\n".to_string()); // 44
    lines.push("      try {\n".to_string()); // 45
    lines.push("  const apiUrl = process.env.REACT_APP_API_URL;\n".to_string()); // 46
    lines.push("        const res = await fetch(`${apiUrl}/employees`);\n".to_string());
    lines.push("      } catch (err) {}\n".to_string());
    lines.push("    };\n".to_string());
    lines.push("  }, []);\n".to_string());
    lines.concat()
}

#[test]
fn test_header_injection_on_disk_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.js");
    fs::write(&path, SERVER_INDEX).unwrap();

    let injection = HeaderInjection::default();

    let content = target::read_target(&path).unwrap();
    let first = injection.apply(&content);
    assert!(first.changed());
    target::write_target(&path, &first.content).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains(
        "allowedHeaders: ['Content-Type',\n    'Cache-Control',\n    'Authorization', 'X-Requested-With'],"
    ));

    let second = injection.apply(&written);
    assert!(!second.changed());
    assert_eq!(second.content, written);
    assert_eq!(
        PatchStatus::of_injection(&injection, Some(written.as_str())),
        PatchStatus::Applied
    );
}

#[test]
fn test_comment_fix_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EnhancedTalentRiskDashboard.tsx");
    let original = dashboard_component();
    fs::write(&path, &original).unwrap();

    let fix = CommentFix::default();
    assert_eq!(
        PatchStatus::of_comment_fix(&fix, Some(original.as_str())),
        PatchStatus::Pending
    );

    let outcome = fix.apply(&target::read_target(&path).unwrap());
    target::write_target(&path, &outcome.content).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches("// Fetch employees").count(), 1);
    assert!(written.contains("      try {\n      const apiUrl = process.env.REACT_APP_API_URL;\n"));
    assert_eq!(written.lines().count(), original.lines().count() - 1);
    assert_eq!(
        PatchStatus::of_comment_fix(&fix, Some(written.as_str())),
        PatchStatus::Applied
    );
}

#[test]
fn test_comment_fix_rerun_keeps_remaining_comment() {
    // After the first run line 44 holds `try {`, so a rerun drops nothing
    let fix = CommentFix::default();
    let once = fix.apply(&dashboard_component()).content;
    let twice = fix.apply(&once);

    assert_eq!(twice.removed_duplicates, 0);
    assert_eq!(twice.content, once);
}

#[test]
fn test_missing_target_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = target::read_target(&dir.path().join("index.js")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read:"));
}
