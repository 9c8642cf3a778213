use anyhow::Result;
use clap::Parser;
use padapatha_acquire::{acquire_range, build_client, output, AcquireOptions};
use padapatha_model::{
    Document, PageRange, SiteConfig, DEFAULT_BASE_URL, DEFAULT_CONTAINER_CLASS, DEFAULT_OUTPUT,
    DEFAULT_TEXT_CLASS,
};
use std::path::Path;

/// Extract Sanskrit content from Rigveda HTML pages and save it to a Word document.
#[derive(Parser)]
#[command(name = "padapatha")]
#[command(version)]
struct Cli {
    /// Volume part of the URL (e.g., "01" to "10")
    x: String,

    /// First page number, inclusive (e.g., 1)
    y1: u32,

    /// Last page number, inclusive (e.g., 100)
    y2: u32,

    /// Output path for the .docx file
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Base URL the volume/page path is appended to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Class of the elements that each hold one fragment
    #[arg(long, default_value = DEFAULT_CONTAINER_CLASS)]
    container_class: String,

    /// Class of the text elements inside a container
    #[arg(long, default_value = DEFAULT_TEXT_CLASS)]
    text_class: String,

    /// Directory to cache the raw HTML of every fetched page
    #[arg(long)]
    cache_dir: Option<String>,

    /// Write a JSON run manifest (pages fetched, where the search stopped) to this path
    #[arg(long)]
    manifest: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.utc);
    run(cli).await
}

/// Collect the requested pages and save them. Nothing is written unless the
/// whole range was processed or the search ended on a missing page.
async fn run(cli: Cli) -> Result<()> {
    let site = SiteConfig::new(&cli.base_url, &cli.container_class, &cli.text_class)?;
    let range = PageRange::new(cli.x.as_str(), cli.y1, cli.y2);
    let client = build_client()?;

    let options = AcquireOptions {
        site: &site,
        range: &range,
        cache_dir: cli.cache_dir.as_deref().map(Path::new),
        show_progress: !cli.no_progress,
    };

    let mut document = Document::new();
    let summary = acquire_range(&client, &options, &mut document).await?;

    output::write_docx(&document, Path::new(&cli.output))?;

    if let Some(stop) = &summary.stopped_at {
        tracing::info!(
            index = stop.index,
            status = stop.status,
            pages = summary.pages_fetched(),
            "Saved a partial range"
        );
    }

    if let Some(manifest_path) = &cli.manifest {
        let manifest = summary.into_manifest(&site, &range, &cli.output);
        output::write_manifest(&manifest, Path::new(manifest_path))?;
    }

    println!("Sanskrit content saved to {}", cli.output);
    Ok(())
}

fn init_logging(level: &LogLevel, utc: bool) {
    // Keep the HTML parser crates quiet at debug/trace
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}
