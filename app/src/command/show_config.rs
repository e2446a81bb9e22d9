use numex_config::Config;

/// Strategy for printing the effective configuration as JSON.
#[derive(Debug, Clone, Copy)]
pub struct ShowConfigStrategy<'a> {
    config: &'a Config,
}

impl<'a> ShowConfigStrategy<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl super::CommandStrategy for ShowConfigStrategy<'_> {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("{}", self.config.to_pretty_json()?);
        Ok(())
    }
}
