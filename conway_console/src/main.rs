// main.rs - Interactive console for Conway's Game of Life

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use conway_console::{Console, ConsoleConfig};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "conway-console")]
#[command(about = "Play Conway's Game of Life from the terminal")]
struct Cli {
    /// Pause between generations in auto mode, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conway_console=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ConsoleConfig {
        step_delay: Duration::from_millis(cli.delay_ms),
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), config);
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
