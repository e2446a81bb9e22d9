use numex_pipeline::Pipeline;
use std::path::PathBuf;
use tracing::info;

/// Strategy for processing a single named file.
///
/// The path is used as given when it exists, otherwise it is looked up under
/// the configured input directory.
#[derive(Debug, Clone, Copy)]
pub struct ExtractFileStrategy<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> ExtractFileStrategy<'a> {
    #[must_use]
    pub const fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }
}

impl super::CommandStrategy for ExtractFileStrategy<'_> {
    type Input = PathBuf;

    fn execute(&self, target: Self::Input) -> anyhow::Result<()> {
        let input = self.pipeline.resolve_target(&target)?;
        info!("Resolved {} to {}", target.display(), input.display());

        super::process_with_progress(self.pipeline, std::slice::from_ref(&input))?;
        Ok(())
    }
}
