use std::path::Path;

use anyhow::Context;
use colored::*;
use nessus_common::{config::Config, success, warn};
use nessus_core::{HostError, HostOptions, ReportDocument, ReportHost, Severity};

use crate::terminal::{colors, format, print};

pub fn events(
    file: &Path,
    severity: Option<Severity>,
    host_filter: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let text: String = super::read_report(file, cfg)?;
    let report = ReportDocument::parse(&text, HostOptions::from(cfg))
        .with_context(|| format!("could not parse {}", file.display()))?;

    let hosts: Vec<ReportHost<'_, '_>> = match host_filter {
        Some(name) => report.find_host(name).into_iter().collect(),
        None => report.hosts(),
    };

    if hosts.is_empty() {
        print::no_results("matching hosts");
        return Ok(());
    }

    let mut listed: usize = 0;
    for (idx, host) in hosts.iter().enumerate() {
        let hostname: &str = host.hostname().unwrap_or("No hostname");
        print::tree_head(idx, hostname);

        let result: Result<usize, HostError> = match severity {
            Some(severity) => print_bucket(host, severity),
            None => print_all(host),
        };

        match result {
            Ok(count) => listed += count,
            Err(e) => warn!("{hostname}: {e}"),
        }
    }

    let scope: String = match severity {
        Some(severity) => format!("{severity} findings"),
        None => "findings".to_string(),
    };
    success!("Listed {} {}", listed.to_string().color(colors::ACCENT).bold(), scope);
    Ok(())
}

fn print_bucket(host: &ReportHost<'_, '_>, severity: Severity) -> Result<usize, HostError> {
    let bucket = host.severity_events(severity)?;
    let declared: u32 = bucket.for_each(|event| print::print_status(format::event_line(event)));

    if declared as usize != bucket.len() {
        warn!(
            "report declares {declared} {severity} findings, {} collected",
            bucket.len()
        );
    }
    Ok(bucket.len())
}

fn print_all(host: &ReportHost<'_, '_>) -> Result<usize, HostError> {
    let mut count: usize = 0;
    host.for_each_event(|event| {
        print::print_status(format::event_line(&event));
        count += 1;
    })?;
    Ok(count)
}
