#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use command::{CommandStrategy, ExtractDirStrategy, ExtractFileStrategy, ShowConfigStrategy};
use numex_config::Config;
use numex_pipeline::{Pipeline, PipelineError};
use tracing::debug;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

mod command;

#[derive(Parser)]
#[command(name = "numex")]
#[command(version, about = "Extract free-standing numbers from text files", long_about = None)]
struct Cli {
    /// File to process; looked up under the input directory if not found as given.
    /// Without it, every file in the input directory is processed.
    file: Option<PathBuf>,

    /// JSON config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory scanned when no file is given
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory output files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Prefix added to each output file name
    #[arg(long)]
    prefix: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(self.config.as_deref())?;
        if let Some(dir) = &self.input_dir {
            config = config.with_input_dir(dir);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_output_prefix(prefix);
        }
        Ok(config)
    }

    const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::WARN
        } else {
            LevelFilter::INFO
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.load_config()?;
    debug!("Effective config: {config:?}");

    if cli.print_config {
        ShowConfigStrategy::new(&config).execute(())?;
        return Ok(ExitCode::SUCCESS);
    }

    config.ensure_dirs()?;
    let pipeline = Pipeline::new(config);

    let result = match cli.file {
        Some(target) => ExtractFileStrategy::new(&pipeline).execute(target),
        None => ExtractDirStrategy::new(&pipeline).execute(()),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e)
            if e.downcast_ref::<PipelineError>()
                .is_some_and(PipelineError::is_not_found) =>
        {
            println!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}
