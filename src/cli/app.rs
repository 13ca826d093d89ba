//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Invocation};
use chatter::config::{CONFIG_ENV, Overrides};
use chatter::core::models::{StatusContext, StatusState};
use chatter::logging::{self, LOG_FILE_ENV};
use chatter::output::OutputMode;

/// chatter - Report CI results and code-review sign-off to GitHub
#[derive(Parser, Debug)]
#[command(
    name = "chatter",
    version,
    about = "Report CI results and code-review sign-off to GitHub",
    long_about = "Post build/test outcomes as commit statuses and gate merges on review.\n\n\
                  A pull request is signed off once someone other than its author\n\
                  comments \"lgtm\" or \"looks good to me\"."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// SHA hash of the commit for which to set status
    #[arg(long, global = true, env = "ghprbActualCommit")]
    pub sha: Option<String>,

    /// Issue (pull request) number to review or comment on
    #[arg(long, global = true, env = "ghprbPullId")]
    pub issue: Option<u64>,

    /// URL to link to this update
    #[arg(long, global = true, env = "JOB_URL")]
    pub url: Option<String>,

    /// Token to use for authentication
    #[arg(long, global = true, env = "GITHUB_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository to act on, as owner/name
    #[arg(long, global = true, env = "ghprbGhRepository")]
    pub repository: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Description of status update
    #[arg(long, global = true)]
    pub description: Option<String>,

    /// Configuration file
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, global = true, env = LOG_FILE_ENV)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set build check status
    Build {
        /// State to set: success, pending, error, failure
        #[arg(default_value = "pending", value_parser = parse_state)]
        state: StatusState,
    },

    /// Set tests check status
    Tests {
        /// State to set: success, pending, error, failure
        #[arg(value_parser = parse_state)]
        state: StatusState,
    },

    /// Check if code review has been completed and set its status
    #[command(name = "codereview")]
    CodeReview,

    /// Post a comment on the issue
    Comment {
        /// Comment text
        message: String,
    },

    /// Show the combined status of the commit
    Status,

    /// Run the webhook relay server
    Serve {
        /// Address to listen on (default from config, else 0.0.0.0:5000)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Show version
    Version,
}

fn parse_state(s: &str) -> Result<StatusState, String> {
    s.parse()
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let invocation = Invocation {
        sha: cli.sha.filter(|s| !s.trim().is_empty()),
        issue: cli.issue,
        url: cli.url.filter(|u| !u.trim().is_empty()),
        description: cli.description,
        config: cli.config,
        overrides: Overrides {
            token: cli.token,
            repository: cli.repository,
            api_url: cli.api_url,
        },
        output_mode,
    };

    match cli.command {
        Some(Command::Build { state }) => {
            commands::report(&invocation, StatusContext::Build, state)
        },
        Some(Command::Tests { state }) => {
            commands::report(&invocation, StatusContext::Tests, state)
        },
        Some(Command::CodeReview) => commands::code_review(&invocation),
        Some(Command::Comment { message }) => commands::comment(&invocation, &message),
        Some(Command::Status) => commands::status(&invocation),
        Some(Command::Serve { bind }) => commands::serve(&invocation, bind),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("chatter v{}", env!("CARGO_PKG_VERSION"));
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
                println!("chatter v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'chatter --help' for usage");
            }
            Ok(())
        },
    }
}
