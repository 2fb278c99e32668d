use std::fmt;
use std::str::FromStr;

/// Severity level of a finding, as numbered in the report's `<severity>` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Informational = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Informational,
        Severity::Low,
        Severity::Medium,
        Severity::High,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u32) -> Option<Self> {
        match level {
            0 => Some(Self::Informational),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Informational => "informational",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Accepts the level names (and their usual short forms) or the numeric level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "informational" | "info" | "i" | "0" => Ok(Self::Informational),
            "low" | "l" | "1" => Ok(Self::Low),
            "medium" | "med" | "m" | "2" => Ok(Self::Medium),
            "high" | "hi" | "h" | "3" => Ok(Self::High),
            other => Err(format!("invalid severity: {other}")),
        }
    }
}
