//! Default targets and patch parameters
//!
//! Each subcommand runs with these values when invoked without arguments,
//! so `srcfix fix-comments` from the frontend directory and
//! `srcfix add-cors-header` from the server directory behave like the
//! one-off fix scripts they replace.

/// Component file rewritten by `fix-comments`
pub const DASHBOARD_COMPONENT: &str = "src/components/EnhancedTalentRiskDashboard.tsx";

/// Server entry file rewritten by `add-cors-header`
pub const SERVER_ENTRY: &str = "index.js";

/// Comment that appears twice in a row in the dashboard component
pub const DUPLICATE_COMMENT: &str = "// Fetch employees";

/// 0-based index of the comment occurrence that is kept
pub const KEPT_COMMENT_LINE: usize = 43;

/// 0-based index of the duplicate comment occurrence that is dropped
pub const DUPLICATE_COMMENT_LINE: usize = 44;

/// Statement whose indentation is normalized
pub const MISINDENTED_STATEMENT: &str = "const apiUrl = process.env.REACT_APP_API_URL;";

/// Indentation for a statement inside the component's `try` block
pub const STATEMENT_INDENT: &str = "      ";

/// Header added to the CORS `allowedHeaders` list
pub const CORS_HEADER: &str = "Cache-Control";

/// Existing header the new one is inserted after, when present
pub const CORS_ANCHOR_HEADER: &str = "Content-Type";

/// Indentation for entries inserted into `allowedHeaders`
pub const CORS_ENTRY_INDENT: &str = "    ";

/// Number of characters of the updated `allowedHeaders` section echoed back
pub const PREVIEW_CHARS: usize = 500;
