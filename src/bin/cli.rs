//! memc CLI Client
//!
//! Command-line interface for reading and writing text values.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use memc::{Client, Config, MemcError};
use tracing_subscriber::{fmt, EnvFilter};

/// memc CLI
#[derive(Parser, Debug)]
#[command(name = "memc-cli")]
#[command(about = "CLI for memcached-compatible caches")]
#[command(version)]
struct Args {
    /// Server address (repeat for several servers)
    #[arg(short, long = "server", default_value = "127.0.0.1:11211")]
    servers: Vec<String>,

    /// Connection dial timeout in milliseconds (0 = none)
    #[arg(long, default_value = "1000")]
    dial_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a text value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a text value
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,

        /// Expiration in whole seconds (0 = never)
        #[arg(short, long, default_value = "0")]
        ttl: u64,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .servers(args.servers)
        .dial_timeout(Duration::from_millis(args.dial_timeout_ms))
        .build();
    let client = Client::with_config(config);

    let outcome = match args.command {
        Commands::Get { key } => client.get::<String>(&key).map(|value| println!("{}", value)),
        Commands::Set { key, value, ttl } => client
            .set_with_ttl(&key, value.as_str(), Duration::from_secs(ttl))
            .map(|()| println!("STORED")),
    };

    client.close();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(MemcError::CacheMiss) => {
            eprintln!("(miss)");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
