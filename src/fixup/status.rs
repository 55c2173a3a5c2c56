//! Whether a patch still has work to do on a target

use serde::Serialize;
use std::fmt;

use super::{CommentFix, HeaderInjection};

/// State of one patch against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
    /// Running the patch would change the target
    Pending,
    /// The target already has the patched form
    Applied,
    /// The target file does not exist
    MissingTarget,
    /// The target has nothing the patch recognizes
    NoMatch,
}

impl fmt::Display for PatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatchStatus::Pending => "pending",
            PatchStatus::Applied => "applied",
            PatchStatus::MissingTarget => "missing target",
            PatchStatus::NoMatch => "no match",
        };
        write!(f, "{}", s)
    }
}

impl PatchStatus {
    /// Status of the comment fix; `None` content means the target is absent
    pub fn of_comment_fix(fix: &CommentFix, content: Option<&str>) -> Self {
        let Some(content) = content else {
            return PatchStatus::MissingTarget;
        };

        if fix.apply(content).changed(content) {
            PatchStatus::Pending
        } else if content.contains(&fix.statement) {
            PatchStatus::Applied
        } else {
            PatchStatus::NoMatch
        }
    }

    /// Status of the header injection; `None` content means the target is absent
    pub fn of_injection(injection: &HeaderInjection, content: Option<&str>) -> Self {
        let Some(content) = content else {
            return PatchStatus::MissingTarget;
        };

        let outcome = injection.apply(content);
        if outcome.changed() {
            PatchStatus::Pending
        } else if outcome.matched > 0 {
            PatchStatus::Applied
        } else {
            PatchStatus::NoMatch
        }
    }
}
