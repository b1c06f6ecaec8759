//! Command-line interface for sitedown.

use clap::Parser;
use std::path::PathBuf;

/// Sitedown - convert Markdown pages to HTML fragments.
///
/// Each input is rendered as one root container element. Output goes to
/// stdout, one document per line.
#[derive(Parser, Debug)]
#[command(
    name = "sitedown",
    author = "Sitedown Contributors",
    version,
    about = "Convert Markdown pages to HTML",
    after_help = "Examples:\n  \
                  cat index.md | sitedown\n  \
                  sitedown about.md contact.md\n  \
                  sitedown --title content/index.md\n  \
                  sitedown -c '[tags]\\nRoot = \"article\"' page.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print the page title (first `# ` heading) instead of HTML
    #[arg(long = "title")]
    pub title: bool,

    /// Leave `[text](url)` as plain text
    #[arg(long = "no-links")]
    pub no_links: bool,

    /// Leave `![alt](url)` as plain text
    #[arg(long = "no-images")]
    pub no_images: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use sitedown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
