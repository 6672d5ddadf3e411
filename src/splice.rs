//! Idempotent insertion of the rendered TOC between sentinel marker lines.

/// Begin marker as written into documents.
pub const TOC_BEGIN: &str = "<!-- TOC start (generated with mdtoc) -->";
/// End marker as written into documents.
pub const TOC_END: &str = "<!-- TOC end -->";

// Recognition is by prefix so hand-edited marker suffixes keep working.
const TOC_BEGIN_PREFIX: &str = "<!-- TOC start";
const TOC_END_PREFIX: &str = "<!-- TOC end";

pub(crate) fn is_begin_marker(line: &str) -> bool {
    line.trim_start().starts_with(TOC_BEGIN_PREFIX)
}

pub(crate) fn is_end_marker(line: &str) -> bool {
    line.trim_start().starts_with(TOC_END_PREFIX)
}

/// Line range of an existing marker pair: `begin` and `end` are the line
/// indices of the marker lines themselves, with `begin < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerSpan {
    begin: usize,
    end: usize,
}

/// Locate a well-formed marker pair. A begin marker without a matching end
/// marker after it is malformed and treated as absent; the lines are left in
/// place but not recognized.
fn find_markers(lines: &[&str]) -> Option<MarkerSpan> {
    let begin = lines.iter().position(|line| is_begin_marker(line))?;
    match lines[begin + 1..]
        .iter()
        .position(|line| is_end_marker(line))
    {
        Some(offset) => Some(MarkerSpan {
            begin,
            end: begin + 1 + offset,
        }),
        None => {
            log::debug!("begin marker without a matching end marker; inserting a fresh pair");
            None
        }
    }
}

/// Produce the final document text from the original text and the rendered
/// TOC block.
///
/// Markers present: the text strictly between them is replaced. Absent, the
/// block is emitted alone (one-shot) or wrapped in a fresh marker pair
/// inserted before the first heading (`first_heading_line`, 1-indexed) or at
/// the start of the document.
pub fn splice(
    input: &str,
    toc: &str,
    one_shot: bool,
    first_heading_line: Option<usize>,
) -> String {
    let lines: Vec<&str> = input.lines().collect();

    if let Some(span) = find_markers(&lines) {
        log::debug!(
            "replacing existing TOC between lines {} and {}",
            span.begin + 1,
            span.end + 1
        );
        let mut out: Vec<&str> = Vec::new();
        out.extend(&lines[..=span.begin]);
        out.extend(toc.lines());
        out.extend(&lines[span.end..]);
        return finish(out, input);
    }

    if one_shot {
        if toc.is_empty() {
            return String::new();
        }
        let mut block = toc.to_string();
        block.push('\n');
        return block;
    }

    let at = first_heading_line.map_or(0, |line| line - 1);
    log::debug!("no markers found, inserting a fresh TOC at line {}", at + 1);

    let mut out: Vec<&str> = Vec::new();
    out.extend(&lines[..at]);
    if at > 0 && !lines[at - 1].trim().is_empty() {
        out.push("");
    }
    out.push(TOC_BEGIN);
    out.extend(toc.lines());
    out.push(TOC_END);
    if lines.get(at).is_some_and(|line| !line.trim().is_empty()) {
        out.push("");
    }
    out.extend(&lines[at..]);
    finish(out, input)
}

/// Join output lines, keeping the original document's trailing-newline
/// convention. A document synthesized from nothing ends with a newline.
fn finish(lines: Vec<&str>, input: &str) -> String {
    let mut out = lines.join("\n");
    if input.ends_with('\n') || input.is_empty() {
        out.push('\n');
    }
    out
}
