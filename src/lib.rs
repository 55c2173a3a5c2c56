//! srcfix library
//!
//! The two source patches behind the `srcfix` CLI, as pure string
//! transformations plus helpers for rewriting the files they target.

pub mod config;
pub mod error;
pub mod fixup;
