use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use kubectl_grep::app::{run, FlagOverrides};
use kubectl_grep::config::Config;
use kubectl_grep::file::loader::{load_file, load_from_stdin};
use kubectl_grep::GrepError;

const EXAMPLES: &str = "\
Examples:
  # Show images of pods in kube-system namespace
  kubectl get pods -o yaml -n kube-system | kubectl-grep image --exact

  # Show kernel version on nodes
  kubectl get node -o yaml | kubectl-grep ker --show-status

  # Show pod's nodeAffinity
  kubectl get pod my-pod -o yaml | kubectl-grep nodeAff";

/// kubectl-grep - find the right piece in kubectl get -o yaml output
#[derive(Parser)]
#[command(name = "kubectl-grep")]
#[command(version)]
#[command(about = "Find the right piece in kubectl get -o yaml output", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Key to search for
    search: Option<String>,

    /// Perform case insensitive matching. By default, search is case sensitive
    #[arg(
        short,
        long,
        env = "KUBECTL_GREP_IGNORE_CASE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        value_parser = FalseyValueParser::new()
    )]
    ignore_case: Option<bool>,

    /// Search for exact key matches. By default, it searches all keys which include the search string
    #[arg(
        short,
        long,
        env = "KUBECTL_GREP_EXACT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        value_parser = FalseyValueParser::new()
    )]
    exact: Option<bool>,

    /// Include results from status fields
    #[arg(
        short,
        long,
        env = "KUBECTL_GREP_SHOW_STATUS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        value_parser = FalseyValueParser::new()
    )]
    show_status: Option<bool>,

    /// Pass output to a shell command, typically to prettify it.
    /// Recommended: `bat --language yaml --style plain --color always`
    #[arg(short, long, env = "KUBECTL_GREP_PASS_OUTPUT", value_name = "COMMAND")]
    pass_output: Option<String>,

    /// Read YAML from a file instead of stdin (.gz files are decompressed)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GrepError>() {
                // The message already echoes the whole input.
                Some(decode @ GrepError::Decode { .. }) => eprintln!("{}", decode),
                _ => eprintln!("{:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let config = Config::load();

    // A flag given as `--exact=false` (or `KUBECTL_GREP_EXACT=false`) turns
    // off what config.toml turned on.
    let options = FlagOverrides {
        ignore_case: cli.ignore_case,
        exact_match: cli.exact,
        show_status: cli.show_status,
        pass_output: cli.pass_output,
    }
    .resolve(cli.search.unwrap_or_default(), &config);

    let input = match &cli.file {
        Some(path) => load_file(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => load_from_stdin().context("Failed to read from stdin")?,
    };

    let output = run(&input, &options, &config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
