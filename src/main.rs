// src/main.rs

use clap::{Parser, Subcommand};
use tracing::info;

use vitals::config::CONFIG;

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Service status endpoints and a guided tour of filesystem primitives", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP status API
    Serve {
        /// Port to listen on (overrides VITALS_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the filesystem walkthrough
    Tour {
        /// Pause between examples in milliseconds (overrides VITALS_TOUR_PAUSE_MS)
        #[arg(long)]
        pause_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging before any async code runs
    if cli.debug || CONFIG.is_debug() {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt().init();
    }

    match cli.command {
        Command::Serve { port } => {
            let port = port.unwrap_or(CONFIG.port);
            info!("Starting vitals status API");
            vitals::api::http::run(&CONFIG.host, port).await?;
        }
        Command::Tour { pause_ms } => {
            let pause = pause_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| CONFIG.tour_pause());
            let summary = vitals::tour::run_all(pause).await;
            info!(
                "Walkthrough finished: {} ok, {} failed",
                summary.completed, summary.failed
            );
        }
    }

    Ok(())
}
