//! # Host Model
//!
//! A [`Host`] is a read-only view over one `<ReportHost>` subtree.
//!
//! Construction does no work. Identity fields are looked up on first access
//! and kept; severity buckets are scanned on first access and kept. Timestamps
//! are the exception and are read from the subtree on every call.
//!
//! Report items are collected with the [`Scope`] of the host's options. The
//! default is [`Scope::Document`], so every host of a multi-host report sees
//! every item of that report and pays for its own scan.

use nessus_common::error::HostError;
use nessus_common::xml::{Scope, XmlQuery};
use tracing::debug;

use crate::bucket::{self, Bucket, REPORT_ITEM_TAG};
use crate::event::Event;
use crate::memo::Memo;
use crate::options::HostOptions;
use crate::severity::Severity;

const HOSTNAME_TAG: &str = "HostName";
const NETBIOS_NAME_TAG: &str = "netbios_name";
const MAC_ADDRESS_TAG: &str = "mac_addr";
const DNS_NAME_TAG: &str = "dns_name";
const OS_NAME_TAG: &str = "os_name";
const START_TIME_TAG: &str = "startTime";
const STOP_TIME_TAG: &str = "stopTime";
const NUM_PORTS_TAG: &str = "num_ports";

#[derive(Debug)]
pub struct Host<N> {
    node: N,
    options: HostOptions,
    hostname: Memo<String>,
    netbios_name: Memo<String>,
    mac_address: Memo<String>,
    dns_name: Memo<String>,
    os_name: Memo<String>,
    scanned_ports: Memo<Option<u32>>,
    buckets: [Memo<Bucket>; 4],
}

impl<N: XmlQuery> Host<N> {
    pub fn new(node: N) -> Self {
        Self::with_options(node, HostOptions::default())
    }

    pub fn with_options(node: N, options: HostOptions) -> Self {
        Self {
            node,
            options,
            hostname: Memo::new(),
            netbios_name: Memo::new(),
            mac_address: Memo::new(),
            dns_name: Memo::new(),
            os_name: Memo::new(),
            scanned_ports: Memo::new(),
            buckets: Default::default(),
        }
    }

    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    pub fn hostname(&self) -> Result<&str, HostError> {
        self.identity(&self.hostname, HOSTNAME_TAG)
    }

    pub fn netbios_name(&self) -> Result<&str, HostError> {
        self.identity(&self.netbios_name, NETBIOS_NAME_TAG)
    }

    pub fn mac_address(&self) -> Result<&str, HostError> {
        self.identity(&self.mac_address, MAC_ADDRESS_TAG)
    }

    pub fn dns_name(&self) -> Result<&str, HostError> {
        self.identity(&self.dns_name, DNS_NAME_TAG)
    }

    pub fn os_name(&self) -> Result<&str, HostError> {
        self.identity(&self.os_name, OS_NAME_TAG)
    }

    /// Raw `<startTime>` text, re-read on every call.
    pub fn scan_start_time(&self) -> Result<String, HostError> {
        self.required_text(START_TIME_TAG)
    }

    /// Raw `<stopTime>` text, re-read on every call.
    pub fn scan_stop_time(&self) -> Result<String, HostError> {
        self.required_text(STOP_TIME_TAG)
    }

    /// Time between start and stop as a sentence, or `"N/A"` if either is empty.
    ///
    /// See [`RunTimeFormat`](crate::run_time::RunTimeFormat) for how the
    /// difference is computed.
    pub fn scan_run_time(&self) -> Result<String, HostError> {
        let start: String = self.scan_start_time()?;
        let stop: String = self.scan_stop_time()?;
        self.options.run_time.run_time(&start, &stop)
    }

    /// Number of scanned ports, `None` when the report says zero.
    pub fn scanned_ports_count(&self) -> Result<Option<u32>, HostError> {
        self.scanned_ports
            .get_or_try_init(|| -> Result<Option<u32>, HostError> {
                let count: u32 = bucket::read_count(self.node, NUM_PORTS_TAG)?;
                Ok((count != 0).then_some(count))
            })
            .copied()
    }

    /// The bucket of `severity`, scanned on first access and cached afterwards.
    pub fn severity_events(&self, severity: Severity) -> Result<&Bucket, HostError> {
        self.buckets[severity.index()].get_or_try_init(|| {
            bucket::collect(
                self.node,
                severity,
                self.options.scope,
                &self.options.counts,
            )
        })
    }

    pub fn informational_severity_events(&self) -> Result<&Bucket, HostError> {
        self.severity_events(Severity::Informational)
    }

    pub fn low_severity_events(&self) -> Result<&Bucket, HostError> {
        self.severity_events(Severity::Low)
    }

    pub fn medium_severity_events(&self) -> Result<&Bucket, HostError> {
        self.severity_events(Severity::Medium)
    }

    pub fn high_severity_events(&self) -> Result<&Bucket, HostError> {
        self.severity_events(Severity::High)
    }

    /// Events actually collected across the four buckets.
    ///
    /// This is not the sum of the declared counts, which come from summary
    /// fields and may disagree with the items present.
    pub fn event_count(&self) -> Result<usize, HostError> {
        Severity::ALL
            .iter()
            .try_fold(0, |total: usize, severity| -> Result<usize, HostError> {
                Ok(total + self.severity_events(*severity)?.len())
            })
    }

    /// Sum of the four declared counts.
    pub fn declared_event_count(&self) -> Result<u32, HostError> {
        Severity::ALL
            .iter()
            .try_fold(0, |total: u32, severity| -> Result<u32, HostError> {
                Ok(total.saturating_add(self.severity_events(*severity)?.declared_count()))
            })
    }

    /// Every report item in scope, freshly read on each call.
    pub fn events(&self) -> Result<Vec<Event>, HostError> {
        self.report_items()
            .into_iter()
            .map(Event::from_node)
            .collect()
    }

    /// Hands a fresh event for every report item in scope to `consumer`.
    ///
    /// Stops at the first malformed item; events before it have been delivered.
    pub fn for_each_event<F>(&self, mut consumer: F) -> Result<(), HostError>
    where
        F: FnMut(Event),
    {
        for item in self.report_items() {
            consumer(Event::from_node(item)?);
        }
        Ok(())
    }

    /// Whether the bucket of `severity` has already been scanned.
    pub fn is_scanned(&self, severity: Severity) -> bool {
        self.buckets[severity.index()].is_computed()
    }

    /// Whether report items are collected from the whole document.
    pub fn scans_document(&self) -> bool {
        self.options.scope == Scope::Document
    }

    fn report_items(&self) -> Vec<N> {
        self.node.find_all(REPORT_ITEM_TAG, self.options.scope)
    }

    fn identity<'s>(
        &'s self,
        memo: &'s Memo<String>,
        tag: &'static str,
    ) -> Result<&'s str, HostError> {
        memo.get_or_try_init(|| -> Result<String, HostError> {
            let text: String = self.required_text(tag)?;
            debug!("read <{tag}> = {text:?}");
            Ok(text)
        })
        .map(String::as_str)
    }

    fn required_text(&self, tag: &'static str) -> Result<String, HostError> {
        self.node
            .child_text(tag)
            .ok_or(HostError::not_found(tag))
    }
}
