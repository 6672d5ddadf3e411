//! Heading extraction from raw Markdown text.

use crate::splice::{is_begin_marker, is_end_marker};

/// A heading located in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Display text, with `#` markers, closing hash runs, and any trailing
    /// `{#id}` hint stripped. Inline formatting is kept verbatim.
    pub text: String,
    /// Heading level (1-6).
    pub level: usize,
    /// 1-indexed source line of the heading text.
    pub line: usize,
    /// Explicit `{#id}` anchor hint, which bypasses slug generation.
    pub custom_anchor: Option<String>,
}

/// Fence tracking state, threaded through the forward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceState {
    Outside,
    Inside,
}

impl FenceState {
    fn toggled(self) -> Self {
        match self {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        }
    }
}

/// Scan a document for headings, in document order.
///
/// Lines inside fenced code blocks are never headings; an unterminated fence
/// suppresses heading detection through the end of the document.
pub fn scan(input: &str) -> Vec<Heading> {
    let lines: Vec<&str> = input.lines().collect();
    let mut headings = Vec::new();
    let mut state = FenceState::Outside;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if is_fence_line(line) {
            state = state.toggled();
            i += 1;
            continue;
        }
        if state == FenceState::Inside {
            i += 1;
            continue;
        }
        if is_begin_marker(line) || is_end_marker(line) {
            i += 1;
            continue;
        }

        if let Some(level) = try_parse_atx_heading(line) {
            let (text, custom_anchor) = split_custom_anchor(atx_text(line, level));
            headings.push(Heading {
                text,
                level,
                line: i + 1,
                custom_anchor,
            });
            i += 1;
            continue;
        }

        if is_setext_candidate(line)
            && let Some(level) = lines.get(i + 1).copied().and_then(setext_level)
        {
            let (text, custom_anchor) = split_custom_anchor(line.trim().to_string());
            headings.push(Heading {
                text,
                level,
                line: i + 1,
                custom_anchor,
            });
            // The underline belongs to the heading.
            i += 2;
            continue;
        }

        i += 1;
    }

    if state == FenceState::Inside {
        log::debug!("unterminated code fence; headings suppressed to end of document");
    }

    headings
}

/// Try to parse an ATX heading from a line, returns heading level (1-6) if found.
pub(crate) fn try_parse_atx_heading(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();

    // Must start with 1-6 # characters
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with(' ') && !after_hashes.starts_with('\t')
    {
        return None;
    }

    // Check leading spaces (max 3)
    let leading_spaces = line.len() - trimmed.len();
    if leading_spaces > 3 {
        return None;
    }

    Some(hash_count)
}

/// Display text of an ATX heading line: content after the marker, with any
/// closing hash run removed.
fn atx_text(line: &str, level: usize) -> String {
    let trimmed = line.trim_start();
    let after_marker = trimmed[level..].trim();
    strip_closing_sequence(after_marker).to_string()
}

/// Strip a trailing `###` run. The run only closes the heading when it is
/// preceded by whitespace or makes up the entire text.
fn strip_closing_sequence(text: &str) -> &str {
    let trimmed = text.trim_end();
    let without_hashes = trimmed.trim_end_matches('#');
    if without_hashes.len() == trimmed.len() {
        return trimmed;
    }
    if without_hashes.is_empty() {
        return "";
    }
    if without_hashes.ends_with(' ') || without_hashes.ends_with('\t') {
        without_hashes.trim_end()
    } else {
        trimmed
    }
}

/// Split a trailing `{#custom-id}` hint off the display text.
fn split_custom_anchor(text: String) -> (String, Option<String>) {
    if text.ends_with('}')
        && let Some(start) = text.rfind("{#")
    {
        let id = &text[start + 2..text.len() - 1];
        if !id.is_empty() && !id.contains(char::is_whitespace) && !id.contains(['{', '}']) {
            let id = id.to_string();
            return (text[..start].trim_end().to_string(), Some(id));
        }
    }
    (text, None)
}

/// A fence delimiter line: three or more backticks or tildes, optionally
/// indented, optionally followed by an info string.
fn is_fence_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    for fence in ['`', '~'] {
        let run = trimmed.chars().take_while(|&c| c == fence).count();
        if run >= 3 {
            return true;
        }
    }
    false
}

/// A line consisting solely of `=` (level 1) or `-` (level 2) repeated.
fn setext_level(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().all(|c| c == '=') {
        return Some(1);
    }
    if trimmed.chars().all(|c| c == '-') {
        return Some(2);
    }
    None
}

/// The text line above a setext underline must be ordinary paragraph text:
/// non-blank, not a list item or blockquote, at most 3 leading spaces.
fn is_setext_candidate(line: &str) -> bool {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.starts_with("- ")
        || trimmed.starts_with("* ")
        || trimmed.starts_with("+ ")
        || trimmed.starts_with('>')
    {
        return false;
    }
    line.len() - trimmed.len() <= 3
}
