pub mod config;
pub mod render;
pub mod scanner;
pub mod slug;
pub mod splice;
pub mod toc;

pub use config::Bullet;
pub use config::Options;
pub use config::OptionsBuilder;
pub use config::Overrides;
pub use config::Profile;
pub use scanner::Heading;
pub use slug::Slugifier;
pub use toc::{TocEntry, TocNode};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Generates or refreshes the table of contents of a Markdown document.
///
/// The result carries the whole document with the TOC block spliced in
/// between sentinel markers (inserted before the first heading when absent),
/// or the block alone in one-shot mode. Re-running on the output reproduces
/// it byte for byte. This function is total: malformed input is resolved by
/// deterministic fallbacks, never an error.
///
/// # Examples
///
/// ```no_run
/// use mdtoc::generate;
///
/// let opts = mdtoc::OptionsBuilder::default().max_level(3).build();
///
/// let input = "# Title\n\n## Section\n";
/// let updated = generate(input, Some(opts));
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown document content
/// * `options` - Optional generation options (defaults to the GitHub profile)
pub fn generate(input: &str, options: Option<Options>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let options = options.unwrap_or_default();

    let line_ending = detect_line_ending(input);
    let normalized_input = input.replace("\r\n", "\n");

    // Step 1: Scan for headings (code fences excluded)
    let headings = scanner::scan(&normalized_input);
    let first_heading_line = headings.first().map(|h| h.line);

    // Step 2: Resolve an anchor per heading. The duplicate counter runs over
    // every heading in the document, including those past max_level, so the
    // suffixes line up with what renderers assign.
    let mut slugifier = Slugifier::new(options.concat_spaces);
    let entries: Vec<TocEntry> = headings
        .into_iter()
        .map(|heading| {
            let anchor = options.generate_anchors.then(|| match heading.custom_anchor {
                Some(id) => id,
                None => format!(
                    "{}{}",
                    options.anchor_prefix,
                    slugifier.slugify(&heading.text)
                ),
            });
            TocEntry {
                text: heading.text,
                anchor,
                level: heading.level,
            }
        })
        .collect();

    // Step 3: Build and render the nested TOC
    let tree = toc::build_tree(entries, options.max_level);
    let block = render::render(&tree, &options);

    // Step 4: Splice it into the document
    let out = splice::splice(
        &normalized_input,
        &block,
        options.one_shot,
        first_heading_line,
    );

    if line_ending == "\r\n" {
        out.replace("\n", "\r\n")
    } else {
        out
    }
}

pub fn generate_with_defaults(input: &str) -> String {
    generate(input, None)
}

/// Scans a Markdown document for headings without touching it.
///
/// Returns the records the TOC would be built from, in document order, with
/// no anchor resolution applied.
///
/// # Arguments
///
/// * `input` - The Markdown document content
pub fn headings(input: &str) -> Vec<Heading> {
    let normalized_input = input.replace("\r\n", "\n");
    scanner::scan(&normalized_input)
}
