//! # Report Totals
//!
//! Per-severity finding counts over all hosts of one report.
//!
//! Under [`Scope::Document`](nessus_common::xml::Scope::Document) every host's
//! buckets hold every item of the report, so collected counts are taken once
//! per severity and not summed across hosts. Declared counts come from each
//! host's own summary fields and are always summed.

use nessus_common::error::HostError;
use nessus_common::xml::XmlQuery;

use crate::host::Host;
use crate::severity::Severity;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTotals {
    collected: [usize; 4],
    declared: [u64; 4],
    failures: Vec<(usize, HostError)>,
}

impl ReportTotals {
    /// Scans the buckets of `hosts`, which must come from the same document.
    pub fn tally<N: XmlQuery>(hosts: &[Host<N>]) -> Self {
        let mut totals = Self::default();
        let mut document_counted = [false; 4];

        for (idx, host) in hosts.iter().enumerate() {
            let mut failure: Option<HostError> = None;
            for severity in Severity::ALL {
                let slot: usize = severity.index();
                match host.severity_events(severity) {
                    Ok(bucket) => {
                        totals.declared[slot] += u64::from(bucket.declared_count());
                        if !host.scans_document() {
                            totals.collected[slot] += bucket.len();
                        } else if !document_counted[slot] {
                            totals.collected[slot] += bucket.len();
                            document_counted[slot] = true;
                        }
                    }
                    Err(e) => {
                        failure.get_or_insert(e);
                    }
                }
            }
            if let Some(e) = failure {
                totals.failures.push((idx, e));
            }
        }
        totals
    }

    pub fn collected(&self, severity: Severity) -> usize {
        self.collected[severity.index()]
    }

    pub fn declared(&self, severity: Severity) -> u64 {
        self.declared[severity.index()]
    }

    pub fn collected_total(&self) -> usize {
        self.collected.iter().sum()
    }

    pub fn declared_total(&self) -> u64 {
        self.declared.iter().sum()
    }

    /// Host index and first error of every host with a bucket that failed to scan.
    pub fn failures(&self) -> &[(usize, HostError)] {
        &self.failures
    }
}
