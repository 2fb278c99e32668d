use std::path::Path;

use anyhow::Context;
use colored::*;
use nessus_common::config::Config;
use nessus_core::{HostOptions, ReportDocument, ReportHost, ReportTotals, Severity};

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::{colors, format};

pub fn summary(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let text: String = super::read_report(file, cfg)?;
    let report = ReportDocument::parse(&text, HostOptions::from(cfg))
        .with_context(|| format!("could not parse {}", file.display()))?;
    let hosts: Vec<ReportHost<'_, '_>> = report.hosts();

    super::warn_report_wide(hosts.len(), cfg);
    let totals: ReportTotals = ReportTotals::tally(&hosts);
    super::warn_failures(&totals);

    GLOBAL_KEY_WIDTH.set("informational".len());
    let name: String = report.name().unwrap_or_else(|| "unnamed".to_string());
    print::aligned_line("Report", name.color(colors::TEXT_DEFAULT));
    print::aligned_line("Hosts", hosts.len().to_string().color(colors::TEXT_DEFAULT));

    for severity in Severity::ALL {
        let value: ColoredString = format!(
            "{} collected, {} declared",
            totals.collected(severity),
            totals.declared(severity)
        )
        .color(format::severity_color(severity));
        print::aligned_line(&severity.to_string(), value);
    }

    if !totals.failures().is_empty() {
        print::aligned_line(
            "Skipped",
            format!("{} hosts", totals.failures().len()).color(colors::MUTED),
        );
    }
    Ok(())
}
