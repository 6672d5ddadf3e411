//! Renderer-compatible anchor generation from heading text.

use std::collections::HashMap;

/// Derives URL-fragment anchors from heading display text.
///
/// Tracks previously generated slugs so duplicates within one document get
/// numeric suffixes. One instance per generation pass; the counter table is
/// never shared across documents.
#[derive(Debug)]
pub struct Slugifier {
    concat_spaces: bool,
    counts: HashMap<String, usize>,
}

impl Slugifier {
    pub fn new(concat_spaces: bool) -> Self {
        Self {
            concat_spaces,
            counts: HashMap::new(),
        }
    }

    /// Generate a unique anchor for a heading.
    ///
    /// The first occurrence of a base slug is returned unchanged; the Nth
    /// duplicate gets a `-N` suffix, counting from `-1`.
    pub fn slugify(&mut self, text: &str) -> String {
        let base = base_slug(text, self.concat_spaces);
        match self.counts.get_mut(&base) {
            None => {
                self.counts.insert(base.clone(), 1);
                base
            }
            Some(seen) => {
                *seen += 1;
                format!("{}-{}", base, *seen - 1)
            }
        }
    }
}

/// The base slug before duplicate disambiguation: inline formatting stripped,
/// lowercased, anything but letters, digits, `-`, and `_` dropped, whitespace
/// turned into hyphens.
pub(crate) fn base_slug(text: &str, concat_spaces: bool) -> String {
    let plain = strip_inline(text);
    let mut slug = String::with_capacity(plain.len());
    let mut pending_space = false;

    for c in plain.to_lowercase().chars() {
        if c.is_whitespace() {
            if concat_spaces {
                pending_space = true;
            } else {
                slug.push('-');
            }
        } else if c.is_alphanumeric() || c == '-' || c == '_' {
            if pending_space {
                slug.push('-');
                pending_space = false;
            }
            slug.push(c);
        }
        // Everything else is dropped. A dropped character does not break a
        // whitespace run for concatenation purposes.
    }

    slug
}

/// Reduce heading text to plain text: emphasis and inline-code delimiters
/// removed, `[text](url)` and `![alt](url)` reduced to their text.
fn strip_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' | '*' | '[' => i += 1,
            ']' => {
                // Link or image destination follows the closing bracket.
                if chars.get(i + 1) == Some(&'(') {
                    match chars[i + 2..].iter().position(|&c| c == ')') {
                        Some(close) => i += close + 3,
                        None => i += 1,
                    }
                } else {
                    i += 1;
                }
            }
            '_' => {
                // An underscore only acts as an emphasis delimiter at a word
                // edge; intraword underscores (snake_case) are literal.
                let at_start =
                    i == 0 || chars[i - 1].is_whitespace() || chars[i - 1] == '_';
                let at_end = i + 1 == chars.len()
                    || chars[i + 1].is_whitespace()
                    || chars[i + 1] == '_';
                if !at_start && !at_end {
                    out.push('_');
                }
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}
