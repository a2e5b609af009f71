//! Tree command - fetch open PRs and print their dependency graph

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::eprintln;
use gh_prtree::config::Config;
use gh_prtree::error::Result;
use gh_prtree::fetch::{PullRequestFilter, fetch_pr_graph};
use gh_prtree::render::{Format, write_graph};
use indicatif::ProgressBar;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Values given on the command line, before config defaults are applied
#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    /// Repository specifier
    pub repository: Option<String>,
    /// Author allow-list
    pub authors: Vec<String>,
    /// Draft exclusion, if the flag was given
    pub exclude_drafts: Option<bool>,
    /// Format selector, if the flag was given
    pub format: Option<String>,
}

/// Options for the tree command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Repository specifier (None = detect)
    pub repository: Option<String>,
    /// Which PRs to keep
    pub filter: PullRequestFilter,
    /// Output format
    pub format: Format,
}

impl TreeOptions {
    /// Merge flags over config file values over built-in defaults
    pub fn resolve(args: TreeArgs, config: &Config) -> Self {
        let authors = if args.authors.is_empty() {
            config.authors.clone()
        } else {
            args.authors
        };
        let exclude_drafts = args
            .exclude_drafts
            .or(config.exclude_drafts)
            .unwrap_or(true);
        let format = args
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(Format::from_selector)
            .unwrap_or_default();

        Self {
            repository: args.repository.filter(|r| !r.is_empty()),
            filter: PullRequestFilter {
                exclude_drafts,
                authors,
            },
            format,
        }
    }
}

/// Await `work`, clearing `spinner` if it fails
async fn while_spinning<T>(
    spinner: &ProgressBar,
    work: impl Future<Output = Result<T>>,
) -> Result<T> {
    work.await.inspect_err(|_| spinner.finish_and_clear())
}

/// Run the tree command
pub async fn run_tree(path: &Path, options: TreeOptions) -> Result<()> {
    debug!(?options, "running tree");
    let ctx = CommandContext::new(path, options.repository.as_deref()).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Fetching pull requests for {}...",
        ctx.platform.config().emphasis()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let graph = while_spinning(
        &spinner,
        fetch_pr_graph(ctx.platform.as_ref(), &ctx.repository, &options.filter),
    )
    .await?;

    spinner.finish_with_message(format!(
        "{} Found {} pull request(s) in {}",
        check(),
        graph.edges.len().accent(),
        ctx.repository.full_name().emphasis()
    ));

    if graph.edges.is_empty() {
        eprintln!("{}", "No open pull requests match the filters.".muted());
    }

    let mut stdout = io::stdout().lock();
    write_graph(&mut stdout, &graph, options.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_prtree::error::Error;

    #[tokio::test]
    async fn test_spinner_cleared_on_failure() {
        let spinner = ProgressBar::hidden();
        let result: Result<()> =
            while_spinning(&spinner, async { Err(Error::Platform("boom".to_string())) }).await;
        assert!(result.is_err());
        assert!(spinner.is_finished());
    }

    #[tokio::test]
    async fn test_spinner_left_running_on_success() {
        let spinner = ProgressBar::hidden();
        let value = while_spinning(&spinner, async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert!(!spinner.is_finished());
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let options = TreeOptions::resolve(TreeArgs::default(), &Config::default());
        assert_eq!(options.repository, None);
        assert!(options.filter.exclude_drafts);
        assert!(options.filter.authors.is_empty());
        assert_eq!(options.format, Format::Mermaid);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = Config {
            format: Some("graphviz".to_string()),
            exclude_drafts: Some(false),
            authors: vec!["alice".to_string()],
        };
        let options = TreeOptions::resolve(TreeArgs::default(), &config);
        assert!(!options.filter.exclude_drafts);
        assert_eq!(options.filter.authors, ["alice"]);
        assert_eq!(options.format, Format::Graphviz);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            format: Some("graphviz".to_string()),
            exclude_drafts: Some(false),
            authors: vec!["alice".to_string()],
        };
        let args = TreeArgs {
            repository: Some("o/r".to_string()),
            authors: vec!["bob".to_string()],
            exclude_drafts: Some(true),
            format: Some("json".to_string()),
        };
        let options = TreeOptions::resolve(args, &config);
        assert_eq!(options.repository.as_deref(), Some("o/r"));
        assert!(options.filter.exclude_drafts);
        assert_eq!(options.filter.authors, ["bob"]);
        assert_eq!(options.format, Format::Json);
    }

    #[test]
    fn test_unknown_format_flag_is_mermaid() {
        let args = TreeArgs {
            format: Some("svg".to_string()),
            ..TreeArgs::default()
        };
        let options = TreeOptions::resolve(args, &Config::default());
        assert_eq!(options.format, Format::Mermaid);
    }

    #[test]
    fn test_empty_repository_flag_means_detect() {
        let args = TreeArgs {
            repository: Some(String::new()),
            ..TreeArgs::default()
        };
        let options = TreeOptions::resolve(args, &Config::default());
        assert_eq!(options.repository, None);
    }
}
