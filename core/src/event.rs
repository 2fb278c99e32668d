use nessus_common::error::HostError;
use nessus_common::xml::XmlQuery;

use crate::severity::Severity;

/// One finding, read from a `<ReportItem>` node.
///
/// Only `<severity>` is required. Every other detail is optional because
/// scanners leave them out for some plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub severity: u32,
    pub port: Option<String>,
    pub plugin_id: Option<u32>,
    pub plugin_name: Option<String>,
    pub data: Option<String>,
}

impl Event {
    pub fn from_node<N: XmlQuery>(node: N) -> Result<Self, HostError> {
        let severity: u32 = read_severity(node)?;
        Ok(Self {
            severity,
            port: non_empty(node.child_text("port")),
            plugin_id: node
                .child_text("pluginID")
                .and_then(|id| id.trim().parse().ok()),
            plugin_name: non_empty(node.child_text("pluginName")),
            data: non_empty(node.child_text("data")),
        })
    }

    /// The bucket this event belongs to, if its severity is one of the four known levels.
    pub fn level(&self) -> Option<Severity> {
        Severity::from_level(self.severity)
    }
}

/// Reads the numeric `<severity>` of a report item node.
pub(crate) fn read_severity<N: XmlQuery>(node: N) -> Result<u32, HostError> {
    let raw: String = node
        .child_text("severity")
        .ok_or_else(|| HostError::MalformedSeverity {
            value: String::new(),
        })?;
    raw.trim()
        .parse()
        .map_err(|_| HostError::MalformedSeverity { value: raw })
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
