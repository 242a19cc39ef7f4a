//! mailhint-tui - interactive email field with domain suggestions

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mailhint_completion::{CompletionConfig, ConfigLoader};
use mailhint_tui::{logging, DemoApp, EmailInput};

#[derive(Parser, Debug)]
#[command(name = "mailhint-tui")]
#[command(about = "Type an email address with inline domain suggestions", long_about = None)]
#[command(version)]
struct Args {
    /// Configuration file (.yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra candidate domain, may be repeated
    #[arg(short, long = "domain")]
    domains: Vec<String>,

    /// Use only the given domains instead of placing them before the built-in ones
    #[arg(long)]
    replace_defaults: bool,

    /// Field width in columns
    #[arg(long, default_value_t = 40)]
    width: u16,

    /// Write warnings to this file; they are discarded otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => CompletionConfig::default(),
    };
    if !args.domains.is_empty() {
        config = config.with_domains(args.domains, args.replace_defaults);
    }

    let input = EmailInput::from_config(args.width, &config);
    if let Some(value) = DemoApp::new(input).run()? {
        println!("{}", value);
    }

    Ok(())
}
