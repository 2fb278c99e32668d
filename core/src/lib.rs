//! # Nessus Report Core
//!
//! Typed, lazily computed views over the hosts of a Nessus (v1) XML report.
//!
//! * **[`host`]**: identity, timing and findings of one `<ReportHost>`.
//! * **[`bucket`]**: findings of one severity plus their declared count.
//! * **[`run_time`]**: scan duration formatting.
//! * **[`report`]**: parsing a document and listing its hosts.
//! * **[`totals`]**: per-severity counts over a whole report.

pub mod bucket;
pub mod event;
pub mod host;
pub mod memo;
pub mod options;
pub mod report;
pub mod run_time;
pub mod severity;
pub mod totals;

pub use bucket::{Bucket, CountSource, DeclaredCounts};
pub use event::Event;
pub use host::Host;
pub use options::HostOptions;
pub use report::{ReportDocument, ReportHost, load_report_text};
pub use run_time::{NOT_AVAILABLE, RunTimeFormat};
pub use severity::Severity;
pub use totals::ReportTotals;

pub use nessus_common::error::{HostError, ReportError};
pub use nessus_common::xml::{Scope, XmlQuery};
