//! CLI integration tests for mdtoc.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (generate, headings)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Error handling

mod common;
mod generate;
mod headings;
