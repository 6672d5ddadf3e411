use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The renderer audience to generate anchors for.
/// Each profile has a different set of default options.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Profile {
    /// GitHub-style anchors (every space becomes a hyphen)
    #[default]
    Github,
    /// GitLab-style anchors (whitespace runs collapse to one hyphen)
    Gitlab,
    /// Bitbucket Server anchors (`markdown-header-` prefix)
    Bitbucket,
}

/// List bullet used for TOC entries.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Bullet {
    #[default]
    Dash,
    Asterisk,
    Plus,
}

impl Bullet {
    pub fn as_char(self) -> char {
        match self {
            Bullet::Dash => '-',
            Bullet::Asterisk => '*',
            Bullet::Plus => '+',
        }
    }
}

/// Options for a single generation pass. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub profile: Profile,
    /// String repeated once per nesting depth in front of each TOC line.
    pub indent_chars: String,
    /// Collapse whitespace runs into a single hyphen instead of one hyphen
    /// per whitespace character.
    pub concat_spaces: bool,
    /// Emit `[text](#anchor)` links; bare text otherwise.
    pub generate_anchors: bool,
    /// Indent by nesting depth within the TOC, so the shallowest heading
    /// starts at column zero. Disabled, indentation follows raw heading
    /// levels.
    pub trim_toc_indent: bool,
    /// Emit the TOC block alone, without markers or the rest of the document.
    pub one_shot: bool,
    /// Headings deeper than this level are left out of the TOC.
    pub max_level: usize,
    pub bullet: Bullet,
    /// Prepended to every generated anchor (not to explicit `{#id}` hints).
    pub anchor_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

impl Options {
    /// Get the default option set for a given renderer profile.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Github => Self::github_defaults(),
            Profile::Gitlab => Self::gitlab_defaults(),
            Profile::Bitbucket => Self::bitbucket_defaults(),
        }
    }

    fn github_defaults() -> Self {
        Self {
            profile: Profile::Github,
            indent_chars: "  ".to_string(),
            concat_spaces: false,
            generate_anchors: true,
            trim_toc_indent: true,
            one_shot: false,
            max_level: 6,
            bullet: Bullet::Dash,
            anchor_prefix: String::new(),
        }
    }

    fn gitlab_defaults() -> Self {
        let mut opts = Self::github_defaults();
        opts.profile = Profile::Gitlab;
        opts.concat_spaces = true;
        opts
    }

    fn bitbucket_defaults() -> Self {
        let mut opts = Self::github_defaults();
        opts.profile = Profile::Bitbucket;
        opts.concat_spaces = true;
        opts.anchor_prefix = "markdown-header-".to_string();
        opts
    }

    /// Resolve the effective options from a profile base, config-file
    /// overrides, and command-line overrides, in that precedence order.
    pub fn resolve(file: Overrides, flags: Overrides) -> Self {
        let profile = flags
            .profile
            .or(file.profile)
            .unwrap_or_default();
        let mut opts = Self::for_profile(profile);
        file.apply_to(&mut opts);
        flags.apply_to(&mut opts);
        opts
    }
}

#[derive(Default, Clone)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Start over from the given profile's defaults. Call this before any
    /// field setters, since it replaces the whole option set.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.options = Options::for_profile(profile);
        self
    }

    pub fn indent_chars(mut self, chars: impl Into<String>) -> Self {
        self.options.indent_chars = chars.into();
        self
    }

    pub fn concat_spaces(mut self, concat: bool) -> Self {
        self.options.concat_spaces = concat;
        self
    }

    pub fn generate_anchors(mut self, anchors: bool) -> Self {
        self.options.generate_anchors = anchors;
        self
    }

    pub fn trim_toc_indent(mut self, trim: bool) -> Self {
        self.options.trim_toc_indent = trim;
        self
    }

    pub fn one_shot(mut self, one_shot: bool) -> Self {
        self.options.one_shot = one_shot;
        self
    }

    pub fn max_level(mut self, level: usize) -> Self {
        self.options.max_level = level;
        self
    }

    pub fn bullet(mut self, bullet: Bullet) -> Self {
        self.options.bullet = bullet;
        self
    }

    pub fn anchor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.anchor_prefix = prefix.into();
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}

/// Partial options as they appear in a config file or on the command line.
/// Fields left unset fall back to the selected profile's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub profile: Option<Profile>,
    pub indent_chars: Option<String>,
    pub concat_spaces: Option<bool>,
    pub generate_anchors: Option<bool>,
    pub trim_toc_indent: Option<bool>,
    pub one_shot: Option<bool>,
    pub max_level: Option<usize>,
    pub bullet: Option<Bullet>,
    pub anchor_prefix: Option<String>,
}

impl Overrides {
    fn apply_to(self, opts: &mut Options) {
        if let Some(chars) = self.indent_chars {
            opts.indent_chars = chars;
        }
        if let Some(concat) = self.concat_spaces {
            opts.concat_spaces = concat;
        }
        if let Some(anchors) = self.generate_anchors {
            opts.generate_anchors = anchors;
        }
        if let Some(trim) = self.trim_toc_indent {
            opts.trim_toc_indent = trim;
        }
        if let Some(one_shot) = self.one_shot {
            opts.one_shot = one_shot;
        }
        if let Some(level) = self.max_level {
            opts.max_level = level.max(1);
        }
        if let Some(bullet) = self.bullet {
            opts.bullet = bullet;
        }
        if let Some(prefix) = self.anchor_prefix {
            opts.anchor_prefix = prefix;
        }
    }
}

const CANDIDATE_NAMES: &[&str] = &[".mdtoc.toml", "mdtoc.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Overrides> {
    toml::from_str::<Overrides>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Overrides> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("mdtoc").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("mdtoc")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .mdtoc.toml, mdtoc.toml
/// 3) XDG: $XDG_CONFIG_HOME/mdtoc/config.toml or ~/.config/mdtoc/config.toml
/// 4) no overrides (profile defaults)
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Overrides, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Overrides::default(), None))
}
