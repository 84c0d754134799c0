//! CLI definitions and entry point

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use resolution_solver::config::AppConfig;
use resolution_solver::output::OutputMode;

/// resolution-solver - Propositional resolution with live input validation
#[derive(Parser, Debug)]
#[command(
    name = "resolution-solver",
    version,
    about = "Propositional resolution with live input validation",
    long_about = "Decide satisfiability of clause sets by resolution.\n\n\
                  Formulas are written as clauses in curly braces, e.g. {p, q}, {!p, r}.\n\
                  Negate a variable with !, ~, ¬, not or \\neg."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a formula and print its status token
    Check {
        /// Formula, or - to read it from stdin
        formula: String,
    },

    /// Validate and resolve a formula, as the calculate button does
    Resolve {
        /// Formula, or - to read it from stdin
        formula: String,

        /// Render the result with the configured page markup
        #[arg(long)]
        markup: bool,
    },

    /// Interactive session: type formulas, :calc to resolve, :quit to leave
    Session {
        /// Text the input starts with
        #[arg(long, default_value = "")]
        initial: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the user config file location
    Path,
}

/// Read the formula argument, `-` meaning stdin
fn formula_text(arg: String) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg);
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    match cli.command {
        Some(Command::Check { formula }) => commands::check(&formula_text(formula)?, output_mode),
        Some(Command::Resolve { formula, markup }) => {
            commands::resolve(&formula_text(formula)?, markup, &config, output_mode)
        },
        Some(Command::Session { initial }) => commands::session(&initial, output_mode),
        Some(Command::Config { action }) => commands::config_cmd(action, &config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("resolution-solver v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("resolution-solver v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'resolution-solver --help' for usage");
                println!("Run 'resolution-solver resolve \"{{p}}, {{!p}}\"' to try it");
            }
            Ok(())
        },
    }
}
