use clap::Parser;
use log::info;
use server::network::Server;
use shared::config::{
    DEFAULT_APPLE_RATE, DEFAULT_COLS, DEFAULT_RESUME_GRACE_PERIOD, DEFAULT_ROWS, DEFAULT_TICK_MS,
};
use shared::GameConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server IP address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Maximum number of connected clients
    #[arg(short, long, default_value = "16")]
    max_clients: usize,

    /// Grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: i32,

    /// Grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: i32,

    /// Movement tick interval in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Ticks between apple spawns
    #[arg(short, long, default_value_t = DEFAULT_APPLE_RATE)]
    apple_rate: u32,

    /// Seconds of countdown before a paused game resumes
    #[arg(short, long, default_value_t = DEFAULT_RESUME_GRACE_PERIOD)]
    grace_period: u32,

    /// Seed for spawn positions; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        tick_ms: args.tick_ms,
        apple_rate: args.apple_rate,
        resume_grace_period: args.grace_period,
    };

    let address = format!("{}:{}", args.host, args.port);
    let mut server = Server::new(&address, config, args.max_clients, args.seed).await?;

    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
