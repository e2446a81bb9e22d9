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

//! File-level driver around [`numex_core::Extractor`].
//!
//! Resolves which inputs to process, runs extraction on each and writes the
//! sorted tokens to `<output_dir>/<output_prefix><file name>`.

pub mod error;
mod pipeline;
pub mod resolve;

pub use error::{PipelineError, Result};
pub use pipeline::{FileReport, Pipeline, RunSummary};
