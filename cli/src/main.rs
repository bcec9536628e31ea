use std::path::{Path, PathBuf};

use clap::Parser;
use spotlight_tour::config::TourError;

mod replay;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Tour(#[from] TourError),
    #[error("invalid page layout: {0}")]
    Page(serde_json::Error),
    #[error("--frame-ms must be a positive number, got {0}")]
    InvalidFrameMs(f64),
    #[error("failed to encode step record: {0}")]
    Encode(serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tour-replay", about = "Replay a spotlight tour against a page layout and print each step")]
struct Cli {
    /// Tour definition JSON.
    #[arg(long, env = "TOUR_FILE")]
    tour: PathBuf,

    /// Page layout JSON: viewport plus selector → natural rectangle.
    #[arg(long, env = "TOUR_PAGE_FILE")]
    page: PathBuf,

    /// Simulated frame interval in milliseconds.
    #[arg(long, env = "TOUR_FRAME_MS", default_value_t = 16.0)]
    frame_ms: f64,

    /// Pretty-print each record.
    #[arg(long)]
    pretty: bool,
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let tour = read(&cli.tour)?;
    let page = read(&cli.page)?;
    for record in replay::replay(&tour, &page, cli.frame_ms, cli.pretty)? {
        println!("{record}");
    }
    Ok(())
}
