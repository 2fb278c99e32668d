use nessus_core::{HostError, HostOptions, ReportTotals, Scope, Severity};

use crate::fixtures::{self, BROKEN_HOST, TWO_HOSTS};

/// Three hosts, two high findings in total.
const THREE_HOSTS: &str = r#"<NessusClientData>
  <Report>
    <ReportHost>
      <HostName>10.0.1.1</HostName>
      <num_hi>1</num_hi>
      <ReportItem><severity>3</severity><pluginID>22194</pluginID></ReportItem>
    </ReportHost>
    <ReportHost>
      <HostName>10.0.1.2</HostName>
      <num_hi>1</num_hi>
      <ReportItem><severity>3</severity><pluginID>22194</pluginID></ReportItem>
    </ReportHost>
    <ReportHost>
      <HostName>10.0.1.3</HostName>
      <num_hi>0</num_hi>
    </ReportHost>
  </Report>
</NessusClientData>
"#;

fn subtree() -> HostOptions {
    HostOptions {
        scope: Scope::Subtree,
        ..HostOptions::default()
    }
}

#[test]
fn document_scope_is_not_multiplied_by_hosts() {
    let report = fixtures::report(THREE_HOSTS, HostOptions::default());
    let hosts = report.hosts();

    // Every host sees both items on its own.
    assert_eq!(hosts[2].high_severity_events().unwrap().len(), 2);

    let totals = ReportTotals::tally(&hosts);
    assert_eq!(totals.collected(Severity::High), 2);
    assert_eq!(totals.collected_total(), 2);
    assert_eq!(totals.declared(Severity::High), 2);
}

#[test]
fn host_scoped_totals_match_document_totals() {
    let document = fixtures::report(THREE_HOSTS, HostOptions::default());
    let scoped = fixtures::report(THREE_HOSTS, subtree());

    assert_eq!(
        ReportTotals::tally(&document.hosts()),
        ReportTotals::tally(&scoped.hosts())
    );
}

#[test]
fn two_hosts_per_severity() {
    let report = fixtures::two_hosts();
    let totals = ReportTotals::tally(&report.hosts());

    let collected: Vec<usize> = Severity::ALL.iter().map(|s| totals.collected(*s)).collect();
    assert_eq!(collected, vec![2, 1, 2, 1]);
    assert_eq!(totals.collected_total(), 6);

    // Classic table: num_lo twice, then num_hi twice, per host.
    let declared: Vec<u64> = Severity::ALL.iter().map(|s| totals.declared(*s)).collect();
    assert_eq!(declared, vec![7, 7, 9, 9]);
    assert_eq!(totals.declared_total(), 32);
}

#[test]
fn two_hosts_scoped_sum_to_the_same() {
    let report = fixtures::report(TWO_HOSTS, subtree());
    let totals = ReportTotals::tally(&report.hosts());

    assert_eq!(totals.collected_total(), 6);
    assert_eq!(totals.collected(Severity::Medium), 2);
}

#[test]
fn failed_scan_is_recorded_per_host() {
    let report = fixtures::report(BROKEN_HOST, HostOptions::default());
    let totals = ReportTotals::tally(&report.hosts());

    assert_eq!(
        totals.failures(),
        &[(
            0,
            HostError::MalformedSeverity {
                value: "critical".to_string()
            }
        )]
    );
    assert_eq!(totals.collected_total(), 0);
}
