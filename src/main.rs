use std::fs::File;
use std::io::{stdin, stdout};
use std::sync::Arc;

use clap::Parser;
use crossterm::tty::IsTty;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use baseview::backend::{Bootstrap, HttpBackend};
use baseview::core::config;
use baseview::tui;

#[derive(Parser)]
#[command(
    name = "baseview",
    about = "Terminal admin console for a PocketBase-compatible data store"
)]
struct Args {
    /// Base URL of the backend admin API
    #[arg(long)]
    backend_url: Option<String>,

    /// Log verbosity for baseview.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // A detached stdio pair means there is no terminal to draw on.
    if !stdin().is_tty() && !stdout().is_tty() {
        eprintln!("baseview requires an interactive terminal. Please run it in a TTY.");
        std::process::exit(1);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("baseview: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.backend_url.as_deref(),
        args.log_level.as_deref(),
    );

    // Initialize file logger - writes to baseview.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("baseview.log") {
        let _ = WriteLogger::init(parse_level(&resolved.log_level), log_config, log_file);
    }

    log::info!("baseview starting up against {}", resolved.backend_url);

    let backend = Arc::new(HttpBackend::new(resolved.backend_url.clone()));

    // The backend may still be coming up; probe it in the background and
    // let the UI start immediately.
    let bootstrap = Bootstrap::start(resolved.backend_url.clone());

    let result = tui::run(backend, &resolved);
    bootstrap.stop();
    result
}

fn parse_level(level: &str) -> LevelFilter {
    match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
