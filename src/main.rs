use clap::Parser;
use tracing::{error, info};

use leadwatch::app::{App, Outcome};
use leadwatch::cli::Cli;
use leadwatch::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("leadwatch starting");

    match App::run(config, &cli.snapshot).await {
        Ok(Outcome::Notified) => info!("run complete, notification sent"),
        Ok(Outcome::Unchanged) => info!("run complete, no change"),
        Err(e) => {
            error!(error = %e, "run aborted");
            std::process::exit(1);
        }
    }
}
