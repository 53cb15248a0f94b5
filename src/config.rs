use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default path of the Letterboxd reviews export.
pub const DEFAULT_INPUT: &str = "reviews.csv";

/// Default path of the document template.
pub const DEFAULT_TEMPLATE: &str = "_VORLAGE.md";

/// Default directory for generated documents.
pub const DEFAULT_OUTPUT_DIR: &str = "reviews";

/// Configuration for a conversion run.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Path to the reviews table
    pub input_path: PathBuf,

    /// Path to the template document
    pub template_path: PathBuf,

    /// Output directory for generated documents
    pub output_dir: PathBuf,

    /// Dry run mode (no file writes)
    pub dry_run: bool,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use letterboxd_md::Config;
    ///
    /// let config = Config::builder()
    ///     .input_path("export/reviews.csv")
    ///     .output_dir("content/reviews")
    ///     .build()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.template_path.to_str(), Some("_VORLAGE.md"));
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Paths are not checked against the filesystem here; the loaders and
    /// the writer report those failures with the offending path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of the paths is empty
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("input_path", &self.input_path),
            ("template_path", &self.template_path),
            ("output_dir", &self.output_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::config(format!("{name} must not be empty")));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            template_path: PathBuf::from(DEFAULT_TEMPLATE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dry_run: false,
        }
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input_path: Option<PathBuf>,
    template_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    dry_run: bool,
}

impl ConfigBuilder {
    /// Sets the path of the reviews table.
    #[must_use]
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the path of the template document.
    #[must_use]
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Sets the output directory for generated documents.
    #[must_use]
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Enables dry run mode (no file writes).
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        let config = Config {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            template_path: self.template_path.unwrap_or(defaults.template_path),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            dry_run: self.dry_run,
        };

        config.validate()?;
        Ok(config)
    }
}
