//! Deduplicated, lexicographically ordered token collection.

use std::collections::BTreeSet;

/// Unique tokens extracted from one text.
///
/// Tokens are compared as plain strings, so `"12.5"` and `"12.50"` are
/// distinct and `"10"` sorts before `"2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, returning `false` if it was already present.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render as newline-terminated lines, one token per line.
    #[must_use]
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.tokens.iter().map(|t| t.len() + 1).sum());
        for token in &self.tokens {
            out.push_str(token);
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.tokens.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}
