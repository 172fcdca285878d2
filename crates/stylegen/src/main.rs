//! stylegen - generate button stylesheets from design tokens
//!
//! Loads a TOML config, derives the design token, and prints the compiled
//! button stylesheet (or its style tree as JSON).

mod generate;
mod watch;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use stylegen_core::{Config, ConfigLoadResult, DesignToken, logging};

use crate::generate::{GenerateOptions, OutputFormat, render, write_output};

/// stylegen - generate button stylesheets from design tokens
#[derive(Parser, Debug)]
#[command(name = "stylegen", version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (uses XDG lookup if not specified)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the button stylesheet (default)
    Generate {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the derived design token as TOML
    Tokens,
    /// Validate configuration and exit (returns non-zero on errors)
    Check,
    /// Print the default configuration with comments
    PrintDefaultConfig,
    /// Regenerate the stylesheet every time the config file changes
    Watch {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug, Default)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override style.prefix_cls
    #[arg(long)]
    prefix: Option<String>,

    /// Override style.icon_prefix_cls
    #[arg(long)]
    icon_prefix: Option<String>,

    /// Do not scope rules with a hash class
    #[arg(long)]
    no_hash: bool,

    /// Compact output (one line)
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            format: self.format,
            prefix_cls: self.prefix.clone(),
            icon_prefix_cls: self.icon_prefix.clone(),
            no_hash: self.no_hash,
            compact: self.compact,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let command = args.command.unwrap_or(Command::Generate {
        output: OutputArgs::default(),
    });

    match command {
        Command::PrintDefaultConfig => {
            print!("{}", stylegen_core::config::DEFAULT_CONFIG_TOML);
            Ok(())
        }
        Command::Generate { output } => {
            let loaded = load_config(args.config.as_deref())?;
            let css = render(&loaded.config, &output.generate_options())?;
            write_output(output.output.as_deref(), &css)
        }
        Command::Tokens => {
            let loaded = load_config(args.config.as_deref())?;
            let token = DesignToken::from_config(&loaded.config);
            print!("{}", toml::to_string(&token).context("failed to serialize tokens")?);
            Ok(())
        }
        Command::Check => {
            let loaded = load_config(args.config.as_deref())?;
            match loaded.source {
                Some(ref source) => println!("Configuration valid: {}", source.display()),
                None => println!("Configuration valid (using defaults)"),
            }
            println!("\n{}", loaded.config.summary());
            Ok(())
        }
        Command::Watch { output } => {
            let loaded = load_config(args.config.as_deref())?;
            let Some(source) = loaded.source else {
                bail!("no config file to watch (pass --config or create one in the search path)");
            };
            watch::run(source, output.output.clone(), output.generate_options())
        }
    }
}

/// Load and validate configuration, logging where it came from.
///
/// If `--config` is given it must exist and be valid (no fallback).
fn load_config(explicit: Option<&std::path::Path>) -> Result<ConfigLoadResult> {
    let load_result = Config::find_and_load(explicit)?;

    if let Some(ref source) = load_result.source {
        info!("Loaded configuration from {:?}", source);
    } else if load_result.used_defaults {
        info!("Using default configuration (no config file found)");
    }

    load_result.config.validate()?;
    debug!("Configuration validated successfully");

    for warning in load_result.config.warnings() {
        warn!("{}", warning);
    }

    Ok(load_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_generate() {
        let args = Args::try_parse_from(["stylegen"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_generate_flags() {
        let args = Args::try_parse_from([
            "stylegen",
            "generate",
            "--format",
            "json",
            "--prefix",
            "my-btn",
            "--no-hash",
            "-o",
            "out.json",
        ])
        .unwrap();

        match args.command {
            Some(Command::Generate { output }) => {
                assert_eq!(output.format, OutputFormat::Json);
                assert_eq!(output.prefix.as_deref(), Some("my-btn"));
                assert!(output.no_hash);
                assert_eq!(output.output, Some(PathBuf::from("out.json")));
            }
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = Args::try_parse_from(["stylegen", "check", "-c", "x.toml", "-vv"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = load_config(Some(std::path::Path::new("/nonexistent/stylegen.toml")));
        assert!(result.is_err());
    }
}
