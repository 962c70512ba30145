//! Cabinet - a versioned, encrypted secret store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cabinet::cli::output;
use cabinet::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("CABINET_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cabinet=debug")
        } else {
            EnvFilter::new("cabinet=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            cabinet::error::Error::Config(cabinet::error::ConfigError::NoKey) => {
                Some("run: cabinet init")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
