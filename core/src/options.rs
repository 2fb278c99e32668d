use nessus_common::config::Config;
use nessus_common::xml::Scope;

use crate::bucket::DeclaredCounts;
use crate::run_time::RunTimeFormat;

/// How a [`Host`](crate::host::Host) reads its report.
///
/// The default is the compatibility profile: report items are scanned across
/// the whole document, declared counts come from the classic field table and
/// run times are component-wise differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostOptions {
    pub scope: Scope,
    pub counts: DeclaredCounts,
    pub run_time: RunTimeFormat,
}

impl From<&Config> for HostOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            scope: if cfg.host_scoped {
                Scope::Subtree
            } else {
                Scope::Document
            },
            counts: if cfg.corrected_counts {
                DeclaredCounts::corrected()
            } else {
                DeclaredCounts::classic()
            },
            run_time: if cfg.elapsed_run_time {
                RunTimeFormat::Elapsed
            } else {
                RunTimeFormat::ComponentWise
            },
        }
    }
}
