//! gh-prtree - print the dependency tree of a repository's open pull requests

mod cli;

use anstream::eprintln;
use anyhow::Context;
use clap::Parser;
use cli::style::Stylize;
use cli::{TreeArgs, TreeOptions, run_tree};
use gh_prtree::config::{CONFIG_ENV, Config, config_path, load_config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate Pull Request tree from GitHub repository
#[derive(Parser, Debug)]
#[command(
    name = "gh-prtree",
    version,
    about = "Generate Pull Request tree from GitHub repository",
    long_about = "A CLI tool to fetch Pull Requests from GitHub and generate a tree structure."
)]
struct Cli {
    /// Repository owner/name (defaults to the current working directory's repository)
    #[arg(short, long, value_name = "[HOST/]OWNER/NAME")]
    repository: Option<String>,

    /// Filter by author (can be specified multiple times: --author foo --author bar)
    #[arg(short, long = "author", value_name = "LOGIN", value_delimiter = ',')]
    authors: Vec<String>,

    /// Exclude draft pull requests [default: true]
    #[arg(
        short = 'd',
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    exclude_drafts: Option<bool>,

    /// Output format (mermaid|json|graphviz) [default: mermaid]
    #[arg(short, long)]
    format: Option<String>,

    /// Config file [default: $GH_PRTREE_CONFIG or <config dir>/gh-prtree/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,gh_prtree=debug"),
        _ => EnvFilter::new("warn,gh_prtree=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let env_config = std::env::var(CONFIG_ENV).ok();
    let config = match config_path(cli.config.as_deref(), env_config.as_deref()) {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    let options = TreeOptions::resolve(
        TreeArgs {
            repository: cli.repository,
            authors: cli.authors,
            exclude_drafts: cli.exclude_drafts,
            format: cli.format,
        },
        &config,
    );

    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    run_tree(&cwd, options).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
