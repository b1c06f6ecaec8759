//! Sitedown - convert Markdown pages to HTML.
//!
//! This binary provides the CLI interface to the sitedown library,
//! reading Markdown from files or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};
use std::path::Path;

use sitedown_config::Config;
use sitedown_core::Result;
use sitedown_parser::extract_title;
use sitedown_render::Renderer;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Sitedown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let renderer = Renderer::from_config(&config)?;
    let mut stdout = io::stdout().lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut markdown = String::new();
        io::stdin().read_to_string(&mut markdown)?;
        emit_document(cli, &renderer, &markdown, &mut stdout)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let markdown = std::fs::read_to_string(path)?;
            emit_document(cli, &renderer, &markdown, &mut stdout)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Load configuration and apply command-line feature switches.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            debug!("Merged config from file: {}", config_arg);
        } else {
            debug!("Merged inline config");
        }
    }

    if cli.no_links {
        config.features.links = false;
    }
    if cli.no_images {
        config.features.images = false;
    }

    Ok(config)
}

/// Convert one document and write the result.
fn emit_document<W: Write>(
    cli: &Cli,
    renderer: &Renderer,
    markdown: &str,
    out: &mut W,
) -> Result<()> {
    let line = if cli.title {
        extract_title(markdown)?
    } else {
        renderer.render_html(markdown)?
    };
    writeln!(out, "{}", line)?;
    Ok(())
}
