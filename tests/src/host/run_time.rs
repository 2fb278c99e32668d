use nessus_core::{HostError, HostOptions, NOT_AVAILABLE, RunTimeFormat};

use crate::fixtures::{self, BROKEN_HOST, TWO_HOSTS};

#[test]
fn raw_timestamps_are_returned_as_is() {
    let report = fixtures::two_hosts();
    let hosts = report.hosts();
    let host = &hosts[0];

    assert_eq!(host.scan_start_time().unwrap(), "Tue Oct 27 10:59:58 2009");
    assert_eq!(host.scan_stop_time().unwrap(), "Tue Oct 27 11:00:02 2009");
}

#[test]
fn run_time_is_component_wise() {
    let report = fixtures::two_hosts();
    let hosts = report.hosts();
    let host = &hosts[0];

    assert_eq!(host.scan_run_time().unwrap(), "1 hours 59 minutes and 56 seconds");
}

#[test]
fn empty_start_time_is_not_available() {
    let report = fixtures::two_hosts();
    let hosts = report.hosts();
    let host = &hosts[1];

    assert_eq!(host.scan_start_time().unwrap(), "");
    assert_eq!(host.scan_run_time().unwrap(), NOT_AVAILABLE);
}

#[test]
fn elapsed_option_carries_between_units() {
    let options = HostOptions {
        run_time: RunTimeFormat::Elapsed,
        ..HostOptions::default()
    };
    let report = fixtures::report(TWO_HOSTS, options);
    let hosts = report.hosts();

    assert_eq!(hosts[0].scan_run_time().unwrap(), "0 hours 0 minutes and 4 seconds");
    assert_eq!(hosts[1].scan_run_time().unwrap(), NOT_AVAILABLE);
}

#[test]
fn unreadable_timestamp_is_an_error() {
    let report = fixtures::report(BROKEN_HOST, HostOptions::default());
    let hosts = report.hosts();
    let host = &hosts[0];

    assert_eq!(
        host.scan_run_time().unwrap_err(),
        HostError::TimestampParse {
            value: "sometime".to_string()
        }
    );
}
