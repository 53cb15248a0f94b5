use anyhow::Context;
use clap::Parser;
use letterboxd_md::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE, Pipeline};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "letterboxd-md",
    version,
    about = "Convert a Letterboxd reviews export into Markdown documents",
    long_about = "Convert a Letterboxd reviews export into one Markdown document per review.\n\n\
    Every row of the export is rendered into the template, replacing the placeholders \
    {{REVIEWTEXT}}, {{DATE}}, {{DISPLAY_DATE}}, {{SLUG}} and {{TITLE}}. Files are named \
    {title}-{year}.md and overwritten on every run.\n\n\
    USAGE EXAMPLES:\n  \
      # Convert reviews.csv with _VORLAGE.md into ./reviews\n  \
      letterboxd-md\n\n  \
      # Use another export and output directory\n  \
      letterboxd-md --input export/reviews.csv --out content/reviews\n\n  \
      # Show what would be written\n  \
      letterboxd-md --dry-run"
)]
struct Cli {
    /// Letterboxd reviews export
    #[arg(short, long, default_value = DEFAULT_INPUT, value_name = "PATH")]
    input: PathBuf,

    /// Template document with placeholders
    #[arg(short, long, default_value = DEFAULT_TEMPLATE, value_name = "PATH")]
    template: PathBuf,

    /// Output directory for generated documents
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, value_name = "PATH")]
    out: PathBuf,

    /// Dry run (don't write files)
    #[arg(long)]
    dry_run: bool,

    /// Print run statistics as JSON instead of the file list
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = Config::builder()
        .input_path(cli.input)
        .template_path(cli.template)
        .output_dir(cli.out)
        .dry_run(cli.dry_run)
        .build()
        .context("Failed to build configuration")?;

    let stats = Pipeline::new(config)
        .context("Failed to create pipeline")?
        .run()
        .context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to encode statistics")?;
        println!("{json}");
    } else {
        stats.print_summary();
    }

    Ok(())
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("letterboxd_md=info"),
        1 => EnvFilter::new("letterboxd_md=debug"),
        _ => EnvFilter::new("letterboxd_md=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
