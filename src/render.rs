//! Serialization of the TOC tree into Markdown list lines.

use crate::config::Options;
use crate::toc::TocNode;

/// Render the tree as a Markdown list block: one line per node, pre-order,
/// no trailing newline and no marker lines. An empty tree renders as an
/// empty string.
///
/// With `trim_toc_indent` on, a line is indented by its nesting depth within
/// the TOC, so the shallowest heading starts at column zero. Off, the
/// indentation follows the raw heading level, preserving the document's own
/// gaps.
pub fn render(root: &TocNode, options: &Options) -> String {
    let mut lines: Vec<String> = Vec::new();

    let mut stack: Vec<(&TocNode, usize)> =
        root.children.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let indent = if options.trim_toc_indent {
            depth
        } else {
            node.level.saturating_sub(1)
        };

        let mut line = options.indent_chars.repeat(indent);
        line.push(options.bullet.as_char());
        line.push(' ');
        match &node.anchor {
            Some(anchor) => line.push_str(&format!("[{}](#{})", node.text, anchor)),
            None => line.push_str(&node.text),
        }
        lines.push(line);

        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    lines.join("\n")
}
