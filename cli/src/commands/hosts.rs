use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use nessus_common::{config::Config, success, warn};
use nessus_core::{HostOptions, ReportDocument, ReportHost, ReportTotals, Severity};

use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print};

pub fn hosts(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let text: String = super::read_report(file, cfg)?;
    let report = ReportDocument::parse(&text, HostOptions::from(cfg))
        .with_context(|| format!("could not parse {}", file.display()))?;
    let hosts: Vec<ReportHost<'_, '_>> = report.hosts();

    if hosts.is_empty() {
        print::header("zero hosts found", cfg.quiet);
        print::no_results("hosts");
        return Ok(());
    }

    super::warn_report_wide(hosts.len(), cfg);

    if cfg.quiet < 2 {
        for (idx, host) in hosts.iter().enumerate() {
            print_host_tree(host, idx);
            if idx + 1 != hosts.len() {
                mprint!();
            }
        }
    }

    let totals: ReportTotals = ReportTotals::tally(&hosts);
    if cfg.quiet >= 2 {
        // The tree already warned about each failed bucket.
        super::warn_failures(&totals);
    }

    print_summary(hosts.len(), totals.collected_total(), start_time.elapsed(), cfg);
    Ok(())
}

fn print_host_tree(host: &ReportHost<'_, '_>, idx: usize) {
    let hostname: &str = host.hostname().unwrap_or_else(|e| {
        warn!("host #{idx}: {e}");
        "No hostname"
    });
    print::tree_head(idx, hostname);

    let mut details: Vec<Detail> = vec![
        format::text_detail("NetBIOS", hostname, host.netbios_name()),
        format::mac_detail(hostname, host.mac_address()),
        format::text_detail("DNS", hostname, host.dns_name()),
        format::text_detail("OS", hostname, host.os_name()),
        format::ports_detail(hostname, host.scanned_ports_count()),
        format::owned_detail("Started", hostname, host.scan_start_time()),
        format::owned_detail("Stopped", hostname, host.scan_stop_time()),
        format::owned_detail("Runtime", hostname, host.scan_run_time()),
    ];

    for severity in Severity::ALL {
        details.push(format::bucket_detail(
            severity,
            hostname,
            host.severity_events(severity),
        ));
    }

    print::as_tree_one_level(details);
}

fn print_summary(hosts_len: usize, findings: usize, total_time: Duration, cfg: &Config) {
    let hosts: ColoredString = format!("{hosts_len} hosts").bold().green();
    let findings: ColoredString = format!("{findings} findings").bold().yellow();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString = &format!("Report Read: {hosts} with {findings} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
