//! Shopline CLI
//!
//! Interactive menu for managing customers, products and orders

use clap::{Parser, ValueEnum};
use shopline_core::logging_facility::{init_with_filter, Profile};
use shopline_core_types::Sensitive;
use shopline_store::Gateway;
use std::io;

mod commands;
mod input;
mod shell;

use shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Human,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "shopline")]
#[command(about = "Shopline - customers, products and orders from the terminal", long_about = None)]
struct Cli {
    /// Database location: a file path, sqlite://<path>, sqlite:<path> or :memory:
    #[arg(long, env = "SHOPLINE_DATABASE_URL", default_value = "shopline.db")]
    db: String,

    /// Format of the log lines written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    /// Log operation details (RUST_LOG overrides this)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_profile(&self) -> Profile {
        match self.log_format {
            LogFormat::Human => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }

    fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn main() {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_with_filter(cli.log_profile(), cli.log_filter());

    let gateway = match Gateway::open(&cli.db) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("Error: cannot open database: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(db = %Sensitive::new(&cli.db), "database ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Shell::new(&gateway, stdin.lock(), stdout.lock()).run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
