//! # Severity Buckets
//!
//! A bucket holds the events of one severity level together with the count
//! the report *declares* for that level. The declared count comes from a
//! summary field of the host, so it can disagree with `events().len()`.
//!
//! Which summary field backs which bucket is a [`DeclaredCounts`] table. The
//! classic table reads `num_lo` for informational and low findings and
//! `num_hi` for medium and high ones; [`DeclaredCounts::corrected`] maps every
//! level to its own field.

use std::slice;

use nessus_common::error::HostError;
use nessus_common::xml::{Scope, XmlQuery};
use tracing::debug;

use crate::event::{self, Event};
use crate::severity::Severity;

pub(crate) const REPORT_ITEM_TAG: &str = "ReportItem";

/// Where the declared count of one bucket comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    /// An unsigned integer summary node of the host, by tag name.
    Field(&'static str),
    /// No summary field: the number of events actually collected.
    Collected,
}

/// Declared count source for each of the four severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredCounts {
    sources: [CountSource; 4],
}

impl DeclaredCounts {
    /// The mapping long-standing report consumers expect.
    pub const fn classic() -> Self {
        Self {
            sources: [
                CountSource::Field("num_lo"),
                CountSource::Field("num_lo"),
                CountSource::Field("num_hi"),
                CountSource::Field("num_hi"),
            ],
        }
    }

    /// One field per level, with informational findings counted as collected.
    pub const fn corrected() -> Self {
        Self {
            sources: [
                CountSource::Collected,
                CountSource::Field("num_lo"),
                CountSource::Field("num_med"),
                CountSource::Field("num_hi"),
            ],
        }
    }

    pub fn with_source(mut self, severity: Severity, source: CountSource) -> Self {
        self.sources[severity.index()] = source;
        self
    }

    pub fn source(&self, severity: Severity) -> CountSource {
        self.sources[severity.index()]
    }
}

impl Default for DeclaredCounts {
    fn default() -> Self {
        Self::classic()
    }
}

/// Events of one severity level and the count the report declares for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    severity: Severity,
    events: Vec<Event>,
    declared: u32,
}

impl Bucket {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The count read from the report's summary field for this level.
    pub fn declared_count(&self) -> u32 {
        self.declared
    }

    /// Hands every event to `consumer` in document order and returns the declared count.
    pub fn for_each<F>(&self, mut consumer: F) -> u32
    where
        F: FnMut(&Event),
    {
        for event in &self.events {
            consumer(event);
        }
        self.declared
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Scans the report items visible from `host` and keeps those at `severity`.
///
/// Any malformed severity met along the way aborts the whole scan, so nothing
/// partial is ever counted.
pub(crate) fn collect<N: XmlQuery>(
    host: N,
    severity: Severity,
    scope: Scope,
    counts: &DeclaredCounts,
) -> Result<Bucket, HostError> {
    let items: Vec<N> = host.find_all(REPORT_ITEM_TAG, scope);
    debug!(
        "scanning {} report items for {} findings ({:?} scope)",
        items.len(),
        severity,
        scope
    );

    let mut events: Vec<Event> = Vec::new();
    for item in items {
        if event::read_severity(item)? != u32::from(severity.level()) {
            continue;
        }
        events.push(Event::from_node(item)?);
    }

    let declared: u32 = match counts.source(severity) {
        CountSource::Field(tag) => read_count(host, tag)?,
        CountSource::Collected => u32::try_from(events.len()).unwrap_or(u32::MAX),
    };

    Ok(Bucket {
        severity,
        events,
        declared,
    })
}

/// Reads an unsigned integer summary field of the host.
pub(crate) fn read_count<N: XmlQuery>(host: N, tag: &'static str) -> Result<u32, HostError> {
    let raw: String = host.child_text(tag).ok_or(HostError::not_found(tag))?;
    raw.trim()
        .parse()
        .map_err(|_| HostError::MalformedCount { tag, value: raw })
}
