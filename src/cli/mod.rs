//! CLI module for the Users Service
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `seed`: insert sample users into the configured store

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Users Service - user registration and lookup API
#[derive(Parser)]
#[command(name = "users-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Insert sample users
    Seed,
}

/// Loads `.env`, configuration and logging shared by every subcommand
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["users-service", "serve", "--port", "5001"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(5001)),
            Command::Seed => panic!("Expected serve"),
        }
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["users-service", "seed"]).unwrap();
        assert!(matches!(cli.command, Command::Seed));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["users-service"]).is_err());
    }
}
