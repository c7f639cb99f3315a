use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use alert_formatter::{AlertConfig, AlertHandler, LogFormat};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "alert_handler")]
#[command(about = "Classify an alarm notification envelope and print the KNOW API alert")]
struct Args {
    /// Envelope JSON file (reads stdin when omitted)
    #[arg(long)]
    event: Option<PathBuf>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn read_event(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = AlertConfig::from_env()?;
    init_tracing(config.log_format);

    let input = read_event(args.event.as_ref())?;
    let handler = AlertHandler::with_defaults(config);

    let response = match handler.handle_json(&input) {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Failed to process alarm notification");
            return Err(e.into());
        }
    };

    info!(status = response.status_code, "Alert processed");
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
