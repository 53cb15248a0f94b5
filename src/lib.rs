//! # letterboxd-md
//!
//! Converts a Letterboxd `reviews.csv` export into one Markdown document per
//! review, using a template with literal placeholders.
//!
//! ## Quick Start
//!
//! ```no_run
//! use letterboxd_md::{Config, Pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .input_path("reviews.csv")
//!     .template_path("_VORLAGE.md")
//!     .output_dir("reviews")
//!     .build()?;
//!
//! Pipeline::new(config)?.run()?.print_summary();
//! # Ok(())
//! # }
//! ```
//!
//! ## Template placeholders
//!
//! | Token              | Replaced with                         |
//! |--------------------|---------------------------------------|
//! | `{{REVIEWTEXT}}`   | formatted review body                 |
//! | `{{DATE}}`         | `Date` cell as exported (`2023-05-01`) |
//! | `{{DISPLAY_DATE}}` | `Date` as `01.05.2023`                |
//! | `{{SLUG}}`         | lower-cased `{title}-{year}`          |
//! | `{{TITLE}}`        | `Review: {Name}`                      |
//!
//! Any other text, including unknown `{{...}}` markers, is copied unchanged.
//!
//! ## Architecture
//!
//! 1. **Template**: loads the template document once
//! 2. **Reader**: parses the table into records
//! 3. **Formatter**: renders each record's body
//! 4. **Assembler**: substitutes placeholders and derives the file name
//! 5. **Writer**: persists documents into the output directory

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod document;
mod error;
mod format;
mod pipeline;
mod slug;
mod template;
mod writer;

pub mod record;

pub use config::{Config, ConfigBuilder, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE};
pub use document::{Document, assemble};
pub use error::{Error, Result};
pub use format::{FormattedReview, format_review};
pub use pipeline::{Pipeline, RunStats};
pub use record::{Record, RecordReader};
pub use slug::sanitize_filename;
pub use template::{Placeholder, Substitutions, Template};

/// Runs a complete conversion with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The template or table file is missing or unreadable
/// - A record lacks an expected column or has an invalid date
/// - The output directory cannot be created or a file cannot be written
///
/// # Examples
///
/// ```no_run
/// use letterboxd_md::{Config, run};
///
/// # fn main() -> anyhow::Result<()> {
/// let stats = run(Config::default())?;
/// println!("{} files", stats.written.len());
/// # Ok(())
/// # }
/// ```
pub fn run(config: Config) -> Result<RunStats> {
    Pipeline::new(config)?.run()
}
