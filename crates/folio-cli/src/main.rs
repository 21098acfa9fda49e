#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "folio: portfolio catalogue analytics",
    long_about = None
)]
struct Cli {
    /// Record source: an http(s) URL or a file path.
    /// Overrides FOLIO_SOURCE and folio.toml.
    #[arg(long, global = true)]
    source: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags and environment.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.json)
    }

    /// Resolve the record source: flag > `FOLIO_SOURCE` > folio.toml > default.
    fn resolve_source(&self) -> anyhow::Result<String> {
        let config = folio_core::config::load_config(&env::current_dir()?)?;
        let env_source = env::var("FOLIO_SOURCE").ok();
        Ok(folio_core::config::resolve_source(
            self.source.as_deref(),
            env_source.as_deref(),
            &config,
        ))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "Show headline catalogue statistics",
        long_about = "Show the total project count and the paid / value-realized percentages.",
        after_help = "EXAMPLES:\n    # Headline stats\n    fo summary\n\n    # Emit machine-readable output\n    fo summary --json"
    )]
    Summary(cmd::summary::SummaryArgs),

    #[command(
        next_help_heading = "Read",
        about = "Print one chart dataset",
        long_about = "Aggregate the catalogue for one chart and print the dataset.",
        after_help = "EXAMPLES:\n    # Ranked entity bars\n    fo chart entity\n\n    # Period line data as JSON\n    fo chart period --json"
    )]
    Chart(cmd::chart::ChartArgs),

    #[command(
        next_help_heading = "Read",
        about = "List catalogue records",
        long_about = "List catalogue records with optional exact-match filters, newest period first.",
        after_help = "EXAMPLES:\n    # Everything from 2023\n    fo list --period 2023\n\n    # Paid studio work as JSON\n    fo list --entity Studio --monetization Paid --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Dashboard",
        about = "Open the full-screen dashboard",
        long_about = "Open the interactive terminal dashboard: summary tiles, charts, and the filterable table.",
        after_help = "EXAMPLES:\n    # Dashboard over the default source\n    fo dashboard\n\n    # Dashboard over a remote catalogue\n    fo dashboard --source https://example.test/details.json"
    )]
    Dashboard(cmd::dashboard::DashboardArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    fo completions bash\n\n    # Generate zsh completions\n    fo completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "folio=debug,info"
        } else {
            "folio=info,warn"
        })
    });

    let format = env::var("FOLIO_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs are diagnostics: stdout stays reserved for command output.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose && !cli.quiet {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Summary(ref args) => {
            let source = cli.resolve_source()?;
            cmd::summary::run_summary(args, output, &source)
        }
        Commands::Chart(ref args) => {
            let source = cli.resolve_source()?;
            cmd::chart::run_chart(args, output, &source)
        }
        Commands::List(ref args) => {
            let source = cli.resolve_source()?;
            cmd::list::run_list(args, output, &source)
        }
        Commands::Dashboard(ref args) => {
            let source = cli.resolve_source()?;
            cmd::dashboard::run_dashboard(args, output, &source)
        }
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
