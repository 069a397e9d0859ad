//! Regform CLI
//!
//! Command-line front end for the wholesale and distributor registration forms.
//!
//! # Usage
//!
//! ```bash
//! regform schema wholesale
//! regform validate distributor --answers answers.toml
//! regform submit wholesale --answers answers.json --signature strokes.json --out submission.json
//! regform terms
//! regform config init
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod answers;
mod commands;
mod config;
mod notify;
mod output;
mod sink;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version)]
#[command(about = "Wholesale and distributor registration forms", long_about = None)]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long, short, env = "REGFORM_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a form's sections and fields
    Schema {
        #[arg(value_enum)]
        form: commands::FormArg,
    },
    /// Check an answers file without submitting
    Validate {
        #[arg(value_enum)]
        form: commands::FormArg,
        /// Answers file (TOML, JSON or YAML)
        #[arg(short, long)]
        answers: PathBuf,
    },
    /// Run a full submission
    Submit {
        #[arg(value_enum)]
        form: commands::FormArg,
        /// Answers file (TOML, JSON or YAML)
        #[arg(short, long)]
        answers: PathBuf,
        /// Signature strokes as a JSON array of point arrays
        #[arg(short, long)]
        signature: Option<PathBuf>,
        /// Write the accepted submission to this JSON file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the Monthly Auto-Ship Program terms
    Terms,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default configuration file
    Init,
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(config::default_path);
    let (settings, config_warning) = match config::load(config_path.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (regform_core::RegformConfig::default(), Some(e)),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_level.as_str().into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = config_warning {
        tracing::warn!("Config not loaded ({}), using defaults", e);
    }

    let result = match cli.command {
        Commands::Schema { form } => commands::schema::handle(form, cli.format),
        Commands::Validate { form, answers } => {
            commands::validate::handle(form, &answers, &settings, cli.format)
        }
        Commands::Submit {
            form,
            answers,
            signature,
            out,
        } => {
            let request = commands::submit::SubmitRequest {
                answers,
                signature,
                out,
            };
            commands::submit::handle(form, request, &settings, cli.format).await
        }
        Commands::Terms => commands::terms::handle(cli.format),
        Commands::Config { action } => commands::config::handle(action, config_path.as_deref(), &settings, cli.format),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
