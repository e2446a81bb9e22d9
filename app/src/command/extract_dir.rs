use numex_pipeline::Pipeline;
use tracing::info;

/// Strategy for processing every entry in the input directory.
///
/// Files are handled in enumeration order and the first failure aborts the
/// remaining ones.
#[derive(Debug, Clone, Copy)]
pub struct ExtractDirStrategy<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> ExtractDirStrategy<'a> {
    #[must_use]
    pub const fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }
}

impl super::CommandStrategy for ExtractDirStrategy<'_> {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let inputs = self.pipeline.input_files()?;
        info!(
            "Processing {} files from {}",
            inputs.len(),
            self.pipeline.config().input_dir.display()
        );

        let summary = super::process_with_progress(self.pipeline, &inputs)?;
        info!(
            "Done: {} files, {} numbers written",
            summary.files, summary.tokens
        );
        Ok(())
    }
}
