//! `confluent -c test-config.yaml -o out/`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use confluent_core::config::{CliOverrides, ConfluentConfig};
use confluent_core::errors::{ConfluentErrorCode, GenerateError};
use confluent_resolve::Generator;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// YAML config document to generate from.
    #[arg(short, long)]
    config: PathBuf,
    /// Directory the generated files are written to.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// `line` or `block`.
    #[arg(long)]
    comment_style: Option<String>,
    /// Emit the generator banner, even when a config file turns it off.
    #[arg(long, overrides_with = "no_banner")]
    banner: bool,
    /// Omit the generator banner.
    #[arg(long, overrides_with = "banner")]
    no_banner: bool,
    #[arg(long)]
    indent: Option<usize>,
}

impl Args {
    /// The later of `--banner` and `--no-banner` wins; neither leaves the
    /// config files in charge.
    fn banner_override(&self) -> Option<bool> {
        match (self.banner, self.no_banner) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            comment_style: self.comment_style.clone(),
            banner: self.banner_override(),
            indent: self.indent,
            output_directory: self.output.clone(),
        }
    }
}

fn main() -> ExitCode {
    confluent_core::tracing::init_tracing();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GenerateError> {
    let cwd = std::env::current_dir().map_err(|source| GenerateError::Io {
        path: ".".to_string(),
        source,
    })?;
    let config = ConfluentConfig::load(&cwd, Some(&args.overrides()))?;

    let generator = Generator::from_path(&args.config, &config)?;
    let written = generator.write(&config.output.effective_directory())?;
    info!(files = written.len(), "generation finished");
    Ok(())
}
