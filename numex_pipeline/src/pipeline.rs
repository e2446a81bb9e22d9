use std::path::{Path, PathBuf};

use numex_config::Config;
use numex_core::Extractor;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::resolve;

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub token_count: usize,
}

/// Totals for a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub tokens: usize,
}

impl RunSummary {
    fn record(&mut self, report: &FileReport) {
        self.files += 1;
        self.tokens += report.token_count;
    }
}

/// Runs the extractor over input files and writes one output file per input.
///
/// Processing is sequential and fail-fast: the first error stops the run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
    extractor: Extractor,
}

impl Pipeline {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_extractor(config, Extractor::new())
    }

    #[must_use]
    pub fn with_extractor(config: Config, extractor: Extractor) -> Self {
        Self { config, extractor }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a named target against the configured input directory.
    pub fn resolve_target(&self, target: &Path) -> Result<PathBuf> {
        resolve::resolve_target(target, &self.config.input_dir)
    }

    /// Every entry in the configured input directory.
    pub fn input_files(&self) -> Result<Vec<PathBuf>> {
        resolve::list_inputs(&self.config.input_dir)
    }

    /// Extract tokens from `input` and overwrite its output file.
    ///
    /// The input is read and closed before the output is opened.
    pub fn process_file(&self, input: &Path) -> Result<FileReport> {
        let output = self
            .config
            .output_path(input)
            .ok_or_else(|| PipelineError::NoFileName {
                path: input.to_path_buf(),
            })?;

        let tokens = self.extractor.extract_file(input)?;

        std::fs::write(&output, tokens.to_lines()).map_err(|source| PipelineError::Write {
            path: output.clone(),
            source,
        })?;

        debug!(
            "Wrote {} tokens from {} to {}",
            tokens.len(),
            input.display(),
            output.display()
        );

        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            token_count: tokens.len(),
        })
    }

    /// Process `inputs` in order, calling `on_start` before and `on_done`
    /// after each file.
    pub fn process_all<S, D>(
        &self,
        inputs: &[PathBuf],
        mut on_start: S,
        mut on_done: D,
    ) -> Result<RunSummary>
    where
        S: FnMut(&Path),
        D: FnMut(&FileReport),
    {
        let mut summary = RunSummary::default();
        for input in inputs {
            on_start(input);
            let report = self.process_file(input)?;
            on_done(&report);
            summary.record(&report);
        }

        debug!(
            "Processed {} files, {} tokens total",
            summary.files, summary.tokens
        );
        Ok(summary)
    }
}
