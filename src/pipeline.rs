use crate::{
    config::Config,
    document::assemble,
    error::Result,
    record::{Record, RecordReader},
    template::{Placeholder, Template},
    writer::Writer,
};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Statistics collected during a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Number of records read from the table
    pub records: usize,

    /// Paths written (or that would be written in dry run), in record order
    pub written: Vec<PathBuf>,

    /// Whether writes were skipped
    pub dry_run: bool,

    /// Output directory path
    pub output_directory: String,

    /// Total execution time
    pub duration: Duration,
}

impl RunStats {
    /// Number of distinct files; lower than `written.len()` when slugs collide.
    #[must_use]
    pub fn unique_files(&self) -> usize {
        self.written.iter().collect::<HashSet<_>>().len()
    }

    /// Prints the created files to stdout.
    pub fn print_summary(&self) {
        let verb = if self.dry_run { "Would create" } else { "Created" };
        println!("{verb} {} review files:", self.written.len());
        for path in &self.written {
            println!("- {}", path.display());
        }
    }
}

/// Orchestrates one conversion run.
pub struct Pipeline {
    config: Config,
    writer: Writer,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let writer = Writer::new(&config.output_dir);

        Ok(Self { config, writer })
    }

    /// Executes the run and returns statistics.
    ///
    /// # Process
    ///
    /// 1. **Load**: reads the template document
    /// 2. **Read**: parses every record of the table
    /// 3. **Render**: assembles and writes one document per record, in order
    ///
    /// The first failing record aborts the run. Documents written for
    /// earlier records stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or table cannot be read, a record
    /// lacks a column or has an invalid date, or a write fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use letterboxd_md::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder()
    ///     .input_path("export/reviews.csv")
    ///     .build()?;
    ///
    /// let stats = Pipeline::new(config)?.run()?;
    /// stats.print_summary();
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(input = %self.config.input_path.display()))]
    pub fn run(self) -> Result<RunStats> {
        let start_time = Instant::now();

        info!("Stage 1/3: Loading template...");
        let template = Template::load(&self.config.template_path)?;
        self.check_template(&template);

        info!("Stage 2/3: Reading reviews...");
        let records = RecordReader::from_path(&self.config.input_path)?.read_all()?;
        info!(
            "✓ Read {} records from {}",
            records.len(),
            self.config.input_path.display()
        );

        if self.config.dry_run {
            warn!("Dry run mode enabled - skipping file writes");
        } else {
            info!("Stage 3/3: Writing review files...");
        }
        let written = self.render_all(&records, &template)?;

        let duration = start_time.elapsed();
        info!(
            "✓ Processed {} records in {:.2}s",
            records.len(),
            duration.as_secs_f64()
        );

        Ok(RunStats {
            records: records.len(),
            written,
            dry_run: self.config.dry_run,
            output_directory: self.config.output_dir.display().to_string(),
            duration,
        })
    }

    fn render_all(&self, records: &[Record], template: &Template) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(records.len());

        for record in records {
            let document = assemble(record, template)?;
            let path = if self.config.dry_run {
                self.writer.output_path(&document)
            } else {
                self.writer.write(&document)?
            };

            debug!(line = record.line(), "Rendered {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// Logs which placeholders the template uses.
    fn check_template(&self, template: &Template) {
        let found = template.placeholders();
        debug!("Template placeholders: {:?}", found);

        if !found.contains(&Placeholder::ReviewText) {
            warn!(
                "Template {} has no {} placeholder; documents will not contain the review",
                self.config.template_path.display(),
                Placeholder::ReviewText.token()
            );
        }
    }
}
