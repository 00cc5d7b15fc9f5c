use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "conway-web")]
#[command(about = "Web server for Conway's Game of Life")]
struct Cli {
    /// TCP address to bind the web server
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Directory containing the frontend assets
    #[arg(long, default_value = "conway_web/static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conway_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match conway_web::serve(cli.bind, &cli.static_dir).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Server error on {}: {err}", cli.bind);
            ExitCode::FAILURE
        }
    }
}
