//! # Report Document
//!
//! Parses a whole report and hands out one [`Host`] per `<ReportHost>`.
//!
//! The parsed tree borrows the report text, so callers keep the text alive
//! for as long as the document and its hosts are in use:
//!
//! ```no_run
//! use nessus_core::{HostOptions, ReportDocument, load_report_text};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = load_report_text("scan.nessus")?;
//! let report = ReportDocument::parse(&text, HostOptions::default())?;
//! for host in report.hosts() {
//!     println!("{}: {} findings", host.hostname()?, host.event_count()?);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use nessus_common::error::ReportError;
use nessus_common::xml::XmlQuery;
use roxmltree::{Document, Node};
use tracing::debug;

use crate::host::Host;
use crate::options::HostOptions;

const REPORT_HOST_TAG: &str = "ReportHost";
const REPORT_NAME_TAG: &str = "ReportName";

/// A host backed by a `roxmltree` node of a [`ReportDocument`].
pub type ReportHost<'a, 'input> = Host<Node<'a, 'input>>;

pub struct ReportDocument<'input> {
    document: Document<'input>,
    options: HostOptions,
}

impl<'input> ReportDocument<'input> {
    pub fn parse(text: &'input str, options: HostOptions) -> Result<Self, ReportError> {
        let document: Document<'input> = Document::parse(text)?;
        debug!("parsed report with {} nodes", document.descendants().count());
        Ok(Self { document, options })
    }

    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    /// Text of the report's `<ReportName>`, if it has one.
    pub fn name(&self) -> Option<String> {
        self.document.root().child_text(REPORT_NAME_TAG)
    }

    /// One host per `<ReportHost>` element, in document order.
    pub fn hosts(&self) -> Vec<ReportHost<'_, 'input>> {
        self.host_nodes()
            .map(|node| Host::with_options(node, self.options))
            .collect()
    }

    pub fn host_count(&self) -> usize {
        self.host_nodes().count()
    }

    /// The first host whose `<HostName>` equals `name`.
    pub fn find_host(&self, name: &str) -> Option<ReportHost<'_, 'input>> {
        self.hosts()
            .into_iter()
            .find(|host| host.hostname().is_ok_and(|hostname| hostname == name))
    }

    fn host_nodes(&self) -> impl Iterator<Item = Node<'_, 'input>> {
        self.document
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == REPORT_HOST_TAG)
    }
}

/// Reads a report file into memory.
pub fn load_report_text<P: AsRef<Path>>(path: P) -> Result<String, ReportError> {
    let path: &Path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
