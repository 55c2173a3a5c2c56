//! Header injection into a CORS `allowedHeaders` list
//!
//! The server's CORS options declare the request headers a client may send
//! as an array literal:
//!
//! ```text
//! allowedHeaders: ['Content-Type', 'Authorization'],
//! ```
//!
//! [`HeaderInjection`] adds one header name to every such list that lacks
//! it. Lists that already name the header, and content without any list,
//! come back byte-identical.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::config;

/// `allowedHeaders: [` + body without a closing bracket + `]`
static ALLOWED_HEADERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(allowedHeaders:\s*\[)([^\]]*)(\])").unwrap());

const QUOTES: [char; 2] = ['\'', '"'];

/// Parameters of the header injection
#[derive(Debug, Clone)]
pub struct HeaderInjection {
    /// Header name to add
    pub header: String,
    /// Header the new entry is placed after, when listed with a trailing comma
    pub anchor: String,
    /// Leading whitespace of inserted entries
    pub indent: String,
}

impl Default for HeaderInjection {
    fn default() -> Self {
        Self::new(config::CORS_HEADER, config::CORS_ANCHOR_HEADER)
    }
}

/// Result of applying a [`HeaderInjection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectOutcome {
    /// Rewritten file content
    pub content: String,
    /// Number of `allowedHeaders` lists found
    pub matched: usize,
    /// Number of lists the header was inserted into
    pub modified: usize,
    /// Number of lists that already contained the header
    pub already_present: usize,
}

impl InjectOutcome {
    /// Whether any list gained the header
    pub fn changed(&self) -> bool {
        self.modified > 0
    }
}

impl HeaderInjection {
    /// Injection of `header` after `anchor`, with the default entry indent
    pub fn new(header: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            anchor: anchor.into(),
            indent: config::CORS_ENTRY_INDENT.to_string(),
        }
    }

    /// Insert the header into every `allowedHeaders` list in `content`
    pub fn apply(&self, content: &str) -> InjectOutcome {
        let mut matched = 0;
        let mut modified = 0;
        let mut already_present = 0;

        let rewritten = ALLOWED_HEADERS.replace_all(content, |caps: &Captures| {
            matched += 1;
            match self.insert_into(&caps[2]) {
                Some(body) => {
                    modified += 1;
                    format!("{}{}{}", &caps[1], body, &caps[3])
                }
                None => {
                    already_present += 1;
                    caps[0].to_string()
                }
            }
        });

        debug!(matched, modified, already_present, header = %self.header, "allowedHeaders scan");

        InjectOutcome {
            content: rewritten.into_owned(),
            matched,
            modified,
            already_present,
        }
    }

    /// Whether `body` already lists the header in either quote style
    fn is_listed(&self, body: &str) -> bool {
        QUOTES
            .iter()
            .any(|q| body.contains(&format!("{q}{}{q}", self.header)))
    }

    /// New list body with the header inserted, or `None` if already listed
    fn insert_into(&self, body: &str) -> Option<String> {
        if self.is_listed(body) {
            return None;
        }

        let nl = line_ending(body);

        for q in QUOTES {
            let anchor = format!("{q}{}{q},", self.anchor);
            let Some(pos) = body.find(&anchor) else {
                continue;
            };

            let (head, tail) = body.split_at(pos + anchor.len());
            let rest = tail.trim_start();
            let gap = &tail[..tail.len() - rest.len()];

            let out = if rest.is_empty() {
                format!("{head}{nl}{}{q}{}{q},{tail}", self.indent, self.header)
            } else if let Some(line_start) = gap.rfind('\n') {
                // Next entry already has its own line; match its indent and leave it as is
                let indent = &gap[line_start + 1..];
                format!("{head}{nl}{indent}{q}{}{q},{tail}", self.header)
            } else {
                format!(
                    "{head}{nl}{indent}{q}{}{q},{nl}{indent}{rest}",
                    self.header,
                    indent = self.indent
                )
            };
            return Some(out);
        }

        let q = quote_style(body);
        let entry = format!("{q}{}{q}", self.header);
        let trimmed = body.trim_end();
        let trailing = &body[trimmed.len()..];
        let indent = last_line_indent(trimmed).unwrap_or(self.indent.as_str());

        let out = if trimmed.is_empty() {
            format!("{entry}{trailing}")
        } else if trimmed.ends_with(',') {
            format!("{trimmed}{nl}{indent}{entry},{trailing}")
        } else {
            format!("{trimmed},{nl}{indent}{entry}{trailing}")
        };
        Some(out)
    }
}

/// `"\r\n"` when the list already uses CRLF line endings
fn line_ending(body: &str) -> &'static str {
    if body.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Leading whitespace of the last line of a multi-line `text`
fn last_line_indent(text: &str) -> Option<&str> {
    let line = &text[text.rfind('\n')? + 1..];
    Some(&line[..line.len() - line.trim_start().len()])
}

/// Quote character used by the first string literal in `body`
fn quote_style(body: &str) -> char {
    body.chars().find(|c| QUOTES.contains(c)).unwrap_or('\'')
}

/// First `allowedHeaders` list in `content`, truncated to `max_chars`
pub fn allowed_headers_preview(content: &str, max_chars: usize) -> Option<&str> {
    let section = ALLOWED_HEADERS.find(content)?.as_str();
    let end = section
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(section.len());
    Some(&section[..end])
}
