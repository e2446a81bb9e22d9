use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory layout and output naming for an extraction run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes and an empty object `{}` is a valid config.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "Config::default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "Config::default_output_prefix")]
    pub output_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: Self::default_input_dir(),
            output_dir: Self::default_output_dir(),
            output_prefix: Self::default_output_prefix(),
        }
    }
}

impl Config {
    fn default_input_dir() -> PathBuf {
        PathBuf::from("input")
    }

    fn default_output_dir() -> PathBuf {
        PathBuf::from("output")
    }

    fn default_output_prefix() -> String {
        "OUTPUT_".to_string()
    }

    /// Load a JSON config file. The file must exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Create the input and output directories if they are missing.
    pub fn ensure_dirs(&self) -> anyhow::Result<()> {
        for dir in [&self.input_dir, &self.output_dir] {
            std::fs::create_dir_all(dir).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {e}", dir.display())
            })?;
            debug!("Ensured directory {}", dir.display());
        }
        Ok(())
    }

    /// Output location for `input`: the output directory plus the prefixed
    /// base name. `None` when `input` has no file name (e.g. `..`).
    #[must_use]
    pub fn output_path(&self, input: &Path) -> Option<PathBuf> {
        let base = input.file_name()?;
        let mut name = std::ffi::OsString::from(&self.output_prefix);
        name.push(base);
        Some(self.output_dir.join(name))
    }

    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("numex_cfg_{tag}_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.output_prefix, "OUTPUT_");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_prefix": "NUM_"}"#).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.output_prefix, "NUM_");

        let empty: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_output_path() {
        let config = Config::default();
        assert_eq!(
            config.output_path(Path::new("input/report.txt")),
            Some(PathBuf::from("output/OUTPUT_report.txt"))
        );
        assert_eq!(
            config.output_path(Path::new("/tmp/elsewhere/notes")),
            Some(PathBuf::from("output/OUTPUT_notes"))
        );
        assert_eq!(config.output_path(Path::new("..")), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_input_dir("in")
            .with_output_dir("out")
            .with_output_prefix("X_");
        assert_eq!(
            config.output_path(Path::new("a.txt")),
            Some(PathBuf::from("out/X_a.txt"))
        );
        assert_eq!(config.input_dir, PathBuf::from("in"));
    }

    #[test]
    fn test_load_and_missing() {
        let dir = temp_dir("load");
        let path = dir.join("numex.json");
        std::fs::write(&path, r#"{"input_dir": "src_texts"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("src_texts"));
        assert_eq!(config.output_dir, PathBuf::from("output"));

        let err = Config::load(&dir.join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));

        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = temp_dir("invalid");
        let path = dir.join("numex.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ensure_dirs_is_idempotent() {
        let dir = temp_dir("dirs");
        let config = Config::default()
            .with_input_dir(dir.join("input"))
            .with_output_dir(dir.join("output"));

        config.ensure_dirs().unwrap();
        config.ensure_dirs().unwrap();
        assert!(dir.join("input").is_dir());
        assert!(dir.join("output").is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
