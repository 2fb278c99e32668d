use colored::*;
use nessus_common::warn;
use nessus_core::{Bucket, Event, HostError, Severity};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Informational => colors::SEVERITY_INFO,
        Severity::Low => colors::SEVERITY_LOW,
        Severity::Medium => colors::SEVERITY_MEDIUM,
        Severity::High => colors::SEVERITY_HIGH,
    }
}

pub fn severity_label(severity: Severity) -> ColoredString {
    let label: &str = match severity {
        Severity::Informational => "INFO",
        Severity::Low => "LOW",
        Severity::Medium => "MEDIUM",
        Severity::High => "HIGH",
    };
    label.color(severity_color(severity)).bold()
}

/// A text field of a host, or a muted placeholder when it could not be read.
pub fn text_detail(key: &str, hostname: &str, value: Result<&str, HostError>) -> Detail {
    let value: ColoredString = match value {
        Ok("") => "empty".color(colors::MUTED),
        Ok(text) => text.color(colors::TEXT_DEFAULT),
        Err(e) => unavailable(hostname, e),
    };
    (key.to_string(), value)
}

pub fn mac_detail(hostname: &str, value: Result<&str, HostError>) -> Detail {
    match value {
        Ok(mac) if !mac.is_empty() => ("MAC".to_string(), mac.color(colors::MAC_ADDR)),
        other => text_detail("MAC", hostname, other),
    }
}

pub fn ports_detail(hostname: &str, value: Result<Option<u32>, HostError>) -> Detail {
    let value: ColoredString = match value {
        Ok(Some(count)) => count.to_string().color(colors::TEXT_DEFAULT),
        Ok(None) => "none".color(colors::MUTED),
        Err(e) => unavailable(hostname, e),
    };
    ("Ports".to_string(), value)
}

pub fn owned_detail(key: &str, hostname: &str, value: Result<String, HostError>) -> Detail {
    match value {
        Ok(text) => text_detail(key, hostname, Ok(text.as_str())),
        Err(e) => text_detail(key, hostname, Err(e)),
    }
}

/// `collected/declared` for one severity bucket.
pub fn bucket_detail(severity: Severity, hostname: &str, bucket: Result<&Bucket, HostError>) -> Detail {
    let key: String = match severity {
        Severity::Informational => "Info".to_string(),
        other => capitalize(&other.to_string()),
    };
    let value: ColoredString = match bucket {
        Ok(bucket) => format!("{}/{}", bucket.len(), bucket.declared_count())
            .color(severity_color(severity)),
        Err(e) => unavailable(hostname, e),
    };
    (key, value)
}

pub fn event_line(event: &Event) -> String {
    let label: ColoredString = match event.level() {
        Some(severity) => severity_label(severity),
        None => format!("SEV{}", event.severity).color(colors::MUTED),
    };
    let plugin_id: String = event
        .plugin_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let name: &str = event.plugin_name.as_deref().unwrap_or("unnamed finding");
    let port: &str = event.port.as_deref().unwrap_or("-");

    format!(
        "{} {} {} {}",
        label,
        plugin_id.color(colors::ACCENT),
        name.color(colors::TEXT_DEFAULT),
        format!("({port})").color(colors::MUTED)
    )
}

fn unavailable(hostname: &str, e: HostError) -> ColoredString {
    warn!("{hostname}: {e}");
    "unavailable".color(colors::MUTED).italic()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
