//! Source patches and target file handling

pub mod comments;
pub mod cors;
pub mod status;
pub mod target;

pub use comments::{CommentFix, CommentFixOutcome};
pub use cors::{allowed_headers_preview, HeaderInjection, InjectOutcome};
pub use status::PatchStatus;
