use anyhow::{bail, Context, Result};
use astra::Server;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use mls_sales_parser::config::Config;
use mls_sales_parser::parser::contains_listings;
use mls_sales_parser::router::{handle, AppState};
use mls_sales_parser::spreadsheets::{
    append_records_csv, export_records_xlsx, records_to_csv, timestamped_filename,
    DEFAULT_BASENAME,
};
use mls_sales_parser::templates::html_error_response;
use mls_sales_parser::{ListingParser, RecordMeta};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Turn MLS sales exports into spreadsheet rows
#[derive(Parser)]
#[command(name = "mls_sales_parser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the upload/preview web server
    Serve,
    /// Parse an export file and write the table next to it
    Parse {
        /// Export text file
        file: PathBuf,

        /// Directory for the output file
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Append rows to an existing CSV instead of writing a new file
        #[arg(long, conflicts_with = "format")]
        append: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Xlsx,
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mls_sales_parser=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Pattern compilation errors are fatal before any input is read.
    let parser = ListingParser::new().context("field catalogue failed to compile")?;

    match cli.command {
        Commands::Serve => serve(parser, config),
        Commands::Parse {
            file,
            out_dir,
            format,
            append,
        } => parse_file(&parser, &config, file, out_dir, format, append),
    }
}

fn serve(parser: ListingParser, config: Config) -> Result<()> {
    let addr = config.addr;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.workers);
    let state = AppState::new(parser, config);

    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => html_error_response(err),
        })
        .context("server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

fn parse_file(
    parser: &ListingParser,
    config: &Config,
    file: PathBuf,
    out_dir: PathBuf,
    format: OutputFormat,
    append: Option<PathBuf>,
) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    tracing::info!(file = %file.display(), bytes = text.len(), "read export");

    if text.trim().is_empty() {
        bail!("{} is empty, nothing to parse", file.display());
    }
    if !contains_listings(&text) {
        bail!("{} contains no MLS# markers", file.display());
    }

    let now = Utc::now().with_timezone(&config.utc_offset);
    let meta = RecordMeta::at(now, config.format.clone());
    let records = parser.parse(&text, &meta);
    let columns = parser.columns();

    if let Some(target) = append {
        let written = append_records_csv(&target, &columns, &records)?;
        tracing::info!(rows = written, file = %target.display(), "appended listings");
        return Ok(());
    }

    let bytes = match format {
        OutputFormat::Csv => records_to_csv(&columns, &records)?,
        OutputFormat::Xlsx => export_records_xlsx(&columns, &records)?,
        OutputFormat::Json => serde_json::to_vec_pretty(&records)?,
    };

    let target = out_dir.join(timestamped_filename(DEFAULT_BASENAME, format.extension(), now));
    std::fs::write(&target, bytes)
        .with_context(|| format!("failed to write {}", target.display()))?;

    tracing::info!(rows = records.len(), file = %target.display(), "wrote listings");
    Ok(())
}
