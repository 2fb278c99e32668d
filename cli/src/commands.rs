pub mod events;
pub mod hosts;
pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use nessus_common::{config::Config, warn};
use nessus_core::{ReportTotals, Severity, load_report_text};

use crate::terminal::spinner;

#[derive(Parser)]
#[command(name = "nessus")]
#[command(about = "Reads Nessus XML reports host by host.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: GlobalOptions,
}

#[derive(Args)]
pub struct GlobalOptions {
    /// Reduce output, repeat for less (-q, -qq)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,
    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
    /// Only count report items inside each host's own block
    #[arg(long, global = true)]
    pub host_scoped: bool,
    /// Read num_med for medium findings and count informational ones directly
    #[arg(long, global = true)]
    pub corrected_counts: bool,
    /// Show the real elapsed scan time instead of per-unit differences
    #[arg(long, global = true)]
    pub elapsed: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show identity, timing and finding counts of every host
    #[command(alias = "h")]
    Hosts { file: PathBuf },
    /// List findings, optionally of one severity or one host
    #[command(alias = "e")]
    Events {
        file: PathBuf,
        /// informational, low, medium or high (or 0-3)
        #[arg(short, long)]
        severity: Option<Severity>,
        /// Only this host (matched against HostName)
        #[arg(long)]
        host: Option<String>,
    },
    /// Totals over the whole report
    #[command(alias = "s")]
    Summary { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&GlobalOptions> for Config {
    fn from(options: &GlobalOptions) -> Self {
        Config {
            no_banner: options.no_banner,
            quiet: options.quiet,
            host_scoped: options.host_scoped,
            corrected_counts: options.corrected_counts,
            elapsed_run_time: options.elapsed,
        }
    }
}

/// Reads the report file behind a spinner.
fn read_report(file: &Path, cfg: &Config) -> anyhow::Result<String> {
    let spinner = spinner::start(format!("Reading {}", file.display()), cfg.quiet);
    let text = load_report_text(file);
    spinner.finish_and_clear();
    text.with_context(|| format!("could not load report {}", file.display()))
}

/// Warns when a multi-host report is scanned document-wide.
fn warn_report_wide(hosts_len: usize, cfg: &Config) {
    if hosts_len > 1 && !cfg.host_scoped {
        warn!(
            "{hosts_len} hosts share this report; each host's findings span the whole report (see --host-scoped)"
        );
    }
}

/// Logs every host whose findings could not be counted.
fn warn_failures(totals: &ReportTotals) {
    for (idx, e) in totals.failures() {
        warn!("host #{idx}: findings not counted: {e}");
    }
}
