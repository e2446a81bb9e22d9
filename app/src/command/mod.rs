//! Static strategy pattern for CLI commands.
//!
//! Each run mode is a separate strategy type. Strategies borrow the pipeline
//! or config they act on, so nothing is cloned per invocation.

use numex_pipeline::{Pipeline, RunSummary};
use std::path::PathBuf;

mod extract_dir;
mod extract_file;
mod show_config;

pub use extract_dir::ExtractDirStrategy;
pub use extract_file::ExtractFileStrategy;
pub use show_config::ShowConfigStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = ();
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Process `inputs` one by one, printing progress before and after each file.
fn process_with_progress(pipeline: &Pipeline, inputs: &[PathBuf]) -> anyhow::Result<RunSummary> {
    let summary = pipeline.process_all(
        inputs,
        |input| println!("Processing {}...", input.display()),
        |report| {
            println!(
                "Extracted {} numbers. Results saved to {}",
                report.token_count,
                report.output.display()
            );
        },
    )?;
    Ok(summary)
}
