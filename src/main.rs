use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::cli::{run_batch, Mode};
use recase::{Config, Convention};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert strings between naming conventions", long_about = None)]
struct Cli {
    /// Strings to convert (reads lines from stdin when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target convention (camel, pascal, kebab, dot)
    #[arg(short, long, value_name = "CONVENTION")]
    to: Option<Convention>,

    /// Parse each input as a JSON value before converting
    #[arg(long)]
    json: bool,

    /// Print the extracted words instead of converting
    #[arg(long, conflicts_with = "to")]
    words: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs fail
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported conventions
    Conventions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.to, cli.format, cli.no_color)?;
    tracing::debug!(?config, "resolved configuration");

    if let Some(Commands::Conventions) = cli.command {
        output::print_conventions(config.color);
        return Ok(());
    }

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs
    };
    tracing::debug!(count = inputs.len(), json = cli.json, "converting inputs");

    let (mode, convention) = if cli.words {
        (Mode::Words, None)
    } else {
        (Mode::Convert(config.convention), Some(config.convention))
    };

    let result = run_batch(&inputs, mode, cli.json);
    output::print_results(&result, convention, config.color, &config.format)
        .context("Failed to render results")?;

    let failed = result.failed_count();
    if config.format == OutputFormat::Text {
        output::print_failure_summary(failed, inputs.len(), config.color);
    }

    // Exit with appropriate code
    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line.context("Failed to read from stdin")?);
    }
    Ok(lines)
}
