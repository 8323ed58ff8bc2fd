use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use hashpy_cli::config::{ConfigManager, get_config};
use hashpy_cli::shell::{self as menu, SessionEnd, ShellSettings};
use hashpy_cli::terminal;
use hashpy_cli::theme::ThemeName;
use std::io;
use std::path::PathBuf;

const INTERRUPT_MESSAGE: &str = "Program interrupted by user. Exiting safely...";

#[derive(Parser)]
#[command(name = "hashpy")]
#[command(author, version, about = "Hash_Py - interactive text hashing lab", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Use this configuration file instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with this theme and skip the theme prompt
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Disable progress bars, slow typing and pauses
    #[arg(long)]
    no_animation: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., shell.theme)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., output.log_file)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,

    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("hashpy_core", log::LevelFilter::Debug)
            .filter_module("hashpy_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Some(Commands::Config { command }) => config_command(command, cli.config),
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => run_interactive(cli.config, cli.theme, cli.no_animation).await,
    }
}

async fn run_interactive(
    config_path: Option<PathBuf>,
    theme: Option<ThemeName>,
    no_animation: bool,
) -> Result<()> {
    let mut config = get_config(config_path).context("Failed to load configuration")?;
    config.apply_cli_overrides(theme, no_animation);
    log::debug!("Effective configuration: {config:?}");

    if !config.output.color_enabled || !terminal::supports_ansi() {
        colored::control::set_override(false);
    }

    let settings = ShellSettings::from_config(&config, theme.is_none(), terminal::is_interactive());

    let session = tokio::task::spawn_blocking(move || {
        let mut shell = menu::Shell::new(io::stdin().lock(), io::stdout(), settings);
        shell.run()
    });

    tokio::select! {
        outcome = session => {
            let end = outcome.context("Interactive session panicked")??;
            if end == SessionEnd::InputClosed {
                print_interrupted();
            }
            Ok(())
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            log::debug!("Received Ctrl-C");
            print_interrupted();
            // The blocking session is parked on stdin and cannot be joined
            std::process::exit(0);
        }
    }
}

fn print_interrupted() {
    println!("\n{}", INTERRUPT_MESSAGE.red());
}

fn config_command(command: ConfigCommand, path: Option<PathBuf>) -> Result<()> {
    let mut manager = path.map(ConfigManager::with_path).unwrap_or_default();

    match command {
        ConfigCommand::Get { key } => match manager.get(&key) {
            Ok(value) => {
                println!("{value}");
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::Set { key, value } => match manager.set(&key, &value) {
            Ok(()) => {
                eprintln!("{}", format!("Set {key} = {value}").green());
                eprintln!(
                    "Configuration saved to: {}",
                    manager.get_config_path().display()
                );
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::List => match manager.list() {
            Ok(items) => {
                eprintln!("{}", "Configuration:".bold().blue());
                eprintln!("Config file: {}", manager.get_config_path().display());
                eprintln!();

                let mut current_section = "";
                for (key, value) in &items {
                    let (section, field) = key.split_once('.').unwrap_or(("general", key.as_str()));
                    if section != current_section {
                        if !current_section.is_empty() {
                            eprintln!();
                        }
                        eprintln!("[{}]", section.yellow());
                        current_section = section;
                    }
                    eprintln!("  {} = {}", field.cyan(), value);
                }
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
