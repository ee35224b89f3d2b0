//! Command-line front end: argument parsing, logging setup, and exit statuses.
//!
//! Output streams are passed in so a whole invocation can be run against
//! in-memory buffers.

use crate::args::Invocation;
use crate::commands::LookupCommand;
use crate::config::Config;
use crate::wildberries::WbClient;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit status of a successful lookup (and of `--help` / `--version`).
pub const EXIT_OK: u8 = 0;
/// Exit status of every usage, configuration, and lookup failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(
    name = "wb-lookup",
    version,
    about = "Fast, stateless Wildberries product card lookup CLI",
    long_about = "Looks up a Wildberries product card by article number and prints a summary, \
                  or one of: body, name, price, salePrice, rating."
)]
pub struct Cli {
    /// Article number, optionally followed by a field (body, name, price, salePrice, rating)
    #[arg(value_name = "ARTICLE [FIELD]")]
    pub args: Vec<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Deadline for the whole lookup in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Deadline for the HTTP call alone in milliseconds
    #[arg(long)]
    pub request_timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// One runnable CLI instance.
#[derive(Debug, Default)]
pub struct App {
    base_url: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points lookups at another card API host (for testing).
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url: Some(base_url) }
    }

    /// Runs one invocation and returns its exit status.
    ///
    /// The lookup output goes to `stdout` followed by a newline; every
    /// diagnostic goes to `stderr`. A failed write counts as a failure.
    pub async fn run<I, T>(&self, args: I, stdout: &mut impl Write, stderr: &mut impl Write) -> u8
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_run(args, stdout, stderr).await.unwrap_or(EXIT_FAILURE)
    }

    async fn try_run<I, T>(
        &self,
        args: I,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> io::Result<u8>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) if e.use_stderr() => {
                write!(stderr, "{}", e.render())?;
                return Ok(EXIT_FAILURE);
            }
            // --help and --version
            Err(e) => {
                write!(stdout, "{}", e.render())?;
                return Ok(EXIT_OK);
            }
        };

        init_logging(cli.verbose);

        // Usage errors are reported before any network activity
        let invocation = match Invocation::from_args(&cli.args) {
            Ok(invocation) => invocation,
            Err(e) => {
                writeln!(stderr, "{}", e)?;
                return Ok(EXIT_FAILURE);
            }
        };

        match self.lookup(&cli, &invocation).await {
            Ok(output) => {
                writeln!(stdout, "{}", output)?;
                Ok(EXIT_OK)
            }
            Err(e) => {
                writeln!(stderr, "Ошибка: {:#}", e)?;
                Ok(EXIT_FAILURE)
            }
        }
    }

    async fn lookup(&self, cli: &Cli, invocation: &Invocation) -> anyhow::Result<String> {
        // Load config with layered overrides
        let config = Config::load(cli.config.as_deref())?
            .with_overrides(cli.timeout_ms, cli.request_timeout_ms);

        let client = WbClient::with_base_url(&config, self.base_url.clone())?;
        let cmd = LookupCommand::new(config);
        Ok(cmd.execute_with_client(&client, invocation).await?)
    }
}

/// Installs the stderr subscriber; stdout is reserved for the lookup output.
///
/// Only the first call in a process takes effect.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
