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

//! Numeric token extraction.
//!
//! The [`Extractor`] scans text for free-standing numbers (at least two digits,
//! optionally dotted or dashed, optionally with a short alphabetic suffix) and
//! collects them into a sorted, deduplicated [`TokenSet`].

pub mod error;
pub mod extract;
pub mod token;

pub use error::{ExtractError, Result};
pub use extract::{DEFAULT_PATTERN, Extractor, extract_numbers};
pub use token::TokenSet;
