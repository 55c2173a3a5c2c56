//! CLI commands

pub mod add_cors_header;
pub mod fix_comments;
pub mod status;
pub mod utils;
