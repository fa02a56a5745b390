//! cfgdiff: structural diff and risk classification for configuration files.

use anyhow::Result;
use cfgdiff::{
    cli,
    config::{AppConfig, ComparePaths, CompareConfig, HistoryViewConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
    risk::RiskLevel,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cfgdiff")]
#[command(version)]
#[command(about = "Structural diff and risk classification for JSON/YAML configuration", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Comparison completed
    1  Error occurred (missing file, parse failure, bad arguments)
    2  Overall risk met the --fail-on level

EXAMPLES:
    # Compare two files
    cfgdiff config/prod.yaml config/prod.next.yaml

    # CI gate: fail when any high-risk change is present
    cfgdiff old.json new.json --fail-on high

    # Validate both files and keep a record of the run
    cfgdiff old.yaml new.yaml --schema schema.yaml --save release-42

    # Show saved comparisons and frequently changed fields
    cfgdiff --history")]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// First (baseline) configuration file
    #[arg(value_name = "FILE_A")]
    file_a: Option<PathBuf>,

    /// Second (candidate) configuration file
    #[arg(value_name = "FILE_B")]
    file_b: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate both files against this schema
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,

    /// Save this comparison to history under a name
    #[arg(long, value_name = "NAME")]
    save: Option<String>,

    /// Show saved comparisons with insights and exit
    #[arg(long)]
    history: bool,

    /// Exit with code 2 when overall risk meets this level
    #[arg(long, value_enum, value_name = "LEVEL")]
    fail_on: Option<RiskLevel>,

    /// Ignore changes at or below a dotted path (repeatable)
    #[arg(long = "ignore", value_name = "PATH")]
    ignore: Vec<String>,

    /// History file location
    #[arg(long, env = "CFGDIFF_HISTORY_FILE", value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::ERROR,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "cfgdiff", &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let overrides = AppConfig::builder()
        .output_file(cli.output)
        .no_color(cli.no_color)
        .quiet(cli.quiet)
        .fail_on(cli.fail_on)
        .ignore_paths(cli.ignore)
        .history_file(cli.history_file)
        .build();
    let (mut app, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    if let Some(format) = cli.format {
        app.output.format = format;
    }

    if cli.history {
        return cli::run_history(HistoryViewConfig::from_app(app));
    }

    let (Some(file_a), Some(file_b)) = (cli.file_a, cli.file_b) else {
        eprintln!("{}", Cli::command().render_usage());
        return Ok(exit_codes::ERROR);
    };

    let config = CompareConfig::from_app(
        app,
        ComparePaths { file_a, file_b },
        cli.schema,
        cli.save,
    );
    cli::run_compare(config)
}
