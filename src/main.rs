use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use mdtoc::{Options, Overrides, Slugifier, generate};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn print_diff(file_path: &str, original: &str, updated: &str) {
    let diff = TextDiff::from_lines(original, updated);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),   // normal
                };

                print!("{}{}{}", style, sign, change.value());

                // Reset color at end of line if it was colored
                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
            }
        }
    }
}

fn load_options(
    explicit: Option<&Path>,
    file: &Option<PathBuf>,
    flags: Overrides,
) -> io::Result<Options> {
    let start_dir = start_dir_for(file)?;
    let (file_overrides, cfg_path) = mdtoc::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(Options::resolve(file_overrides, flags))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Headings { file } => {
            let opts = load_options(cli.config.as_deref(), &file, Overrides::default())?;
            let input = read_all(file.as_ref())?;

            let mut slugifier = Slugifier::new(opts.concat_spaces);
            for heading in mdtoc::headings(&input) {
                let anchor = match &heading.custom_anchor {
                    Some(id) => id.clone(),
                    None => format!("{}{}", opts.anchor_prefix, slugifier.slugify(&heading.text)),
                };
                println!(
                    "{:>5}  {} {}  (#{})",
                    heading.line,
                    "#".repeat(heading.level),
                    heading.text,
                    anchor
                );
            }
            Ok(())
        }
        Commands::Generate {
            file,
            check,
            write,
            output,
            profile,
            indent_chars,
            max_level,
            bullet,
            oneshot,
            concat_spaces,
            no_concat_spaces,
            no_anchors,
            no_trim,
        } => {
            if write && file.is_none() {
                eprintln!("error: --write requires a file argument, not stdin");
                std::process::exit(2);
            }

            let flags = Overrides {
                profile,
                indent_chars,
                max_level,
                bullet,
                one_shot: oneshot.then_some(true),
                concat_spaces: if concat_spaces {
                    Some(true)
                } else if no_concat_spaces {
                    Some(false)
                } else {
                    None
                },
                generate_anchors: no_anchors.then_some(false),
                trim_toc_indent: no_trim.then_some(false),
                anchor_prefix: None,
            };
            let opts = load_options(cli.config.as_deref(), &file, flags)?;

            let input = read_all(file.as_ref())?;
            let updated = generate(&input, Some(opts));

            if check {
                if input != updated {
                    let file_name = file.as_ref().and_then(|p| p.to_str()).unwrap_or("<stdin>");
                    print_diff(file_name, &input, &updated);
                    std::process::exit(1);
                }
                // Only print success message if there's a file (not stdin)
                if file.is_some() {
                    println!("TOC is up to date");
                }
            } else if write {
                if let Some(file_path) = &file {
                    fs::write(file_path, &updated)?;
                    println!("Updated {}", file_path.display());
                }
            } else if let Some(out_path) = &output {
                fs::write(out_path, &updated)?;
                println!("Wrote {}", out_path.display());
            } else {
                print!("{updated}");
            }

            Ok(())
        }
    }
}
