//! Pattern-based numeric token extraction.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::token::TokenSet;

/// Free-standing numbers of two or more digits, optionally followed by either
/// dotted or dashed digit groups (never both), then up to three letters.
pub const DEFAULT_PATTERN: &str = r"\b\d{2,}((\.\d+)+|(-\d+)+)?([a-zA-Z]{1,3})?\b";

#[allow(clippy::expect_used)]
static DEFAULT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default pattern is valid"));

/// Scans text and collects every non-overlapping match into a [`TokenSet`].
#[derive(Debug, Clone)]
pub struct Extractor {
    regex: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}

impl Extractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an extractor around a caller-supplied pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Extract unique tokens from `text`.
    ///
    /// Matches containing `:` are dropped (time-like values).
    #[must_use]
    pub fn extract(&self, text: &str) -> TokenSet {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !token.contains(':'))
            .collect()
    }

    /// Read `path` fully as UTF-8 and extract its tokens.
    pub fn extract_file(&self, path: &Path) -> Result<TokenSet> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| ExtractError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let tokens = self.extract(&text);
        debug!(
            "Extracted {} tokens from {} bytes of {}",
            tokens.len(),
            text.len(),
            path.display()
        );
        Ok(tokens)
    }
}

/// Extract tokens from `text` with the default pattern, in ascending order.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<String> {
    Extractor::new().extract(text).into_vec()
}
