//! Duplicate comment removal and statement re-indentation
//!
//! The dashboard component ended up with the same comment on two
//! consecutive lines and one assignment statement at the wrong depth.
//! The fix is positional: the duplicate is only recognized at a fixed line
//! index, so it must run against the file revision it was written for.

use tracing::debug;

use crate::config;

/// Parameters of the comment/indentation fix
#[derive(Debug, Clone)]
pub struct CommentFix {
    /// Comment text looked for at the kept and duplicate positions
    pub comment: String,
    /// 0-based line index whose comment is kept
    pub kept_line: usize,
    /// 0-based line index whose comment is dropped
    pub duplicate_line: usize,
    /// Statement whose leading whitespace is replaced
    pub statement: String,
    /// Leading whitespace written before the statement
    pub indent: String,
}

impl Default for CommentFix {
    fn default() -> Self {
        Self {
            comment: config::DUPLICATE_COMMENT.to_string(),
            kept_line: config::KEPT_COMMENT_LINE,
            duplicate_line: config::DUPLICATE_COMMENT_LINE,
            statement: config::MISINDENTED_STATEMENT.to_string(),
            indent: config::STATEMENT_INDENT.to_string(),
        }
    }
}

/// Result of applying a [`CommentFix`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFixOutcome {
    /// Rewritten file content
    pub content: String,
    /// Number of duplicate comment lines dropped (0 or 1)
    pub removed_duplicates: usize,
    /// Number of statement lines whose indentation was rewritten
    pub reindented: usize,
}

impl CommentFixOutcome {
    /// Whether the rewrite differs from `original`
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

impl CommentFix {
    /// Apply the fix to `content`, keeping every line terminator intact
    pub fn apply(&self, content: &str) -> CommentFixOutcome {
        let mut out = String::with_capacity(content.len());
        let mut removed_duplicates = 0;
        let mut reindented = 0;

        for (index, line) in content.split_inclusive('\n').enumerate() {
            let at_comment_slot = index == self.kept_line || index == self.duplicate_line;

            if at_comment_slot && line.contains(&self.comment) {
                if index == self.duplicate_line {
                    debug!(line = index + 1, "dropping duplicate comment");
                    removed_duplicates += 1;
                } else {
                    out.push_str(line);
                }
                continue;
            }

            if line.contains(&self.statement) {
                debug!(line = index + 1, "re-indenting statement");
                out.push_str(&self.indent);
                out.push_str(line.trim_start());
                reindented += 1;
            } else {
                out.push_str(line);
            }
        }

        CommentFixOutcome {
            content: out,
            removed_duplicates,
            reindented,
        }
    }
}
