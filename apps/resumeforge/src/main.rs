use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumeforge::cli::{error_json, run, Cli};
use resumeforge::config::Config;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", error_json(&err));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting ResumeForge v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let output = run(cli, &config)?;
    println!("{output}");
    Ok(())
}
