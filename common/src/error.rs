use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the accessors of a single host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A required node is absent from the host subtree.
    #[error("required field <{tag}> not found")]
    FieldNotFound { tag: &'static str },

    /// A non-empty timestamp without a readable clock time.
    #[error("cannot parse timestamp '{value}'")]
    TimestampParse { value: String },

    /// A report item whose `<severity>` is missing or not a number.
    #[error("malformed report item severity '{value}'")]
    MalformedSeverity { value: String },

    /// A numeric summary field holding something other than an unsigned integer.
    #[error("field <{tag}> holds '{value}', expected an unsigned integer")]
    MalformedCount { tag: &'static str, value: String },
}

impl HostError {
    pub fn not_found(tag: &'static str) -> Self {
        Self::FieldNotFound { tag }
    }
}

/// Failures raised while reading or parsing a whole report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid report xml: {0}")]
    Xml(#[from] roxmltree::Error),
}
