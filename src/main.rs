//! Points Trie - Main entrypoint.
//!
//! This is the main entry point for the points trie shell.
//! It loads configuration, initializes the logging system, and runs the shell.

use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use points_trie_lib::config::{ConfigLoader, LogConfig, TrieShellConfig, ENV_PREFIX};
use points_trie_lib::error::{TrieShellError, TrieShellResult};
use points_trie_lib::shell::Shell;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the points trie shell.
#[derive(Parser, Debug)]
#[clap(name = "points_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell on stdin/stdout
    Shell,

    /// Run the commands in a script file
    Run {
        /// Path to the script
        #[clap(value_parser)]
        script: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with shell output. `RUST_LOG` takes
/// precedence over the configured level.
fn init_logging(log: &LogConfig) -> TrieShellResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| TrieShellError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load the configuration, exiting with a message if it is invalid.
///
/// Logging is not up yet at this point, so errors go straight to stderr.
fn load_config(loader: &ConfigLoader) -> TrieShellConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> TrieShellResult<()> {
    let args = <Args as clap::Parser>::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let config = load_config(&loader);
            init_logging(&config.log)?;
            info!(version = points_trie_lib::VERSION, "starting interactive shell");

            let stdin = io::stdin();
            let mut shell = Shell::interactive(stdin.lock(), io::stdout().lock(), config.shell);
            shell.run()?;

            info!("shell stopped");
            Ok(())
        }
        Command::Run { script } => {
            let config = load_config(&loader);
            init_logging(&config.log)?;
            info!(?script, "running script");

            let file = fs::File::open(&script)?;
            let mut shell = Shell::script(BufReader::new(file), io::stdout().lock(), config.shell);
            shell.run()?;

            info!(keys = shell.trie().len(), "script finished");
            Ok(())
        }
        Command::Validate => {
            let config = load_config(&loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            let toml = TrieShellConfig::default().to_toml()?;

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, toml)?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}
