use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mdtoc::{Bullet, Profile};

#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(author, version)]
#[command(about = "A table-of-contents generator for Markdown documents")]
#[command(
    long_about = "mdtoc reads a Markdown document, extracts its headings, and inserts (or \
    refreshes) a nested table of contents whose entries link to renderer-compatible anchors. \
    The block is wrapped in sentinel comment lines, so re-running mdtoc on its own output \
    only rewrites the block and leaves the rest of the document untouched."
)]
#[command(after_help = "\
EXAMPLES:

    # Print the document with a TOC to stdout
    mdtoc generate README.md

    # Read from stdin
    cat README.md | mdtoc generate

    # Update the file in place
    mdtoc generate --write README.md

    # Print only the TOC block, without markers
    mdtoc generate --oneshot README.md

    # Check that the TOC is up to date (exit code 1 if not)
    mdtoc generate --check README.md

    # List detected headings and their anchors
    mdtoc headings README.md

CONFIGURATION:

mdtoc looks for configuration files in this order:
  1. Explicit --config path
  2. .mdtoc.toml or mdtoc.toml in current/parent directories
  3. ~/.config/mdtoc/config.toml (XDG)
  4. Built-in defaults

Example .mdtoc.toml:

    profile = \"gitlab\"
    max_level = 3
    indent_chars = \"    \"

For more information, visit: https://github.com/mdtoc-rs/mdtoc")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdtoc will \
        search for .mdtoc.toml or mdtoc.toml in the current directory and its parents, \
        then fall back to ~/.config/mdtoc/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate or refresh the table of contents of a document
    #[command(
        long_about = "Generate a table of contents for a Markdown document. By default the \
        whole updated document is printed to stdout. Use --write to update the input file in \
        place, --output to write elsewhere, or --check to verify the TOC is current without \
        making changes. When the document already contains a marker pair, only the text \
        between the markers is replaced."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Generate to stdout
    mdtoc generate README.md

    # Update in place
    mdtoc generate --write README.md

    # GitLab-style anchors, two levels deep
    mdtoc generate --profile gitlab --max-level 2 README.md

    # TOC block only, no markers
    mdtoc generate --oneshot README.md

GENERATION RULES:

  - Headings inside fenced code blocks are ignored
  - Duplicate headings get -1, -2, ... anchor suffixes
  - A trailing {#custom-id} on a heading overrides its generated anchor
  - Generation is idempotent (generate twice = generate once)")]
    Generate {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Check whether the TOC is up to date without making changes
        #[arg(long)]
        #[arg(help = "Check if the TOC is current (exit code 1 if not)")]
        #[arg(
            long_help = "Check whether the document's TOC is up to date without making any \
            changes. If it is stale, displays a diff and exits with code 1. Useful for \
            CI/CD pipelines."
        )]
        check: bool,

        /// Update the input file in place
        #[arg(long, conflicts_with_all = ["check", "output"])]
        #[arg(help = "Write the result back to the input file")]
        write: bool,

        /// Write the result to a different file
        #[arg(short, long, value_name = "PATH", conflicts_with = "check")]
        output: Option<PathBuf>,

        /// Renderer profile supplying option defaults
        #[arg(long, value_enum)]
        profile: Option<Profile>,

        /// Indent string repeated once per nesting depth
        #[arg(long, value_name = "CHARS")]
        indent_chars: Option<String>,

        /// Deepest heading level to include
        #[arg(long, value_name = "LEVEL")]
        max_level: Option<usize>,

        /// List bullet for TOC entries
        #[arg(long, value_enum)]
        bullet: Option<Bullet>,

        /// Print only the TOC block, without markers or document content
        #[arg(long)]
        oneshot: bool,

        /// Collapse whitespace runs into a single hyphen in anchors
        #[arg(long, overrides_with = "no_concat_spaces")]
        concat_spaces: bool,

        /// One hyphen per whitespace character in anchors
        #[arg(long)]
        no_concat_spaces: bool,

        /// Emit heading text without link targets
        #[arg(long)]
        no_anchors: bool,

        /// Indent by raw heading level instead of nesting depth
        #[arg(long)]
        no_trim: bool,
    },
    /// List the headings detected in a document
    #[command(
        long_about = "Scan a Markdown document and list every heading the generator would \
        consider, with its source line, level, and resolved anchor. Useful for debugging \
        anchor mismatches and fence handling."
    )]
    Headings {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
