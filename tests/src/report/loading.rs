use std::fs;

use nessus_core::{HostOptions, ReportDocument, ReportError, load_report_text};

use crate::fixtures::TWO_HOSTS;

#[test]
fn loads_report_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekly.nessus");
    fs::write(&path, TWO_HOSTS).unwrap();

    let text = load_report_text(&path).unwrap();
    let report = ReportDocument::parse(&text, HostOptions::default()).unwrap();

    assert_eq!(report.name().as_deref(), Some("Weekly internal scan"));
    assert_eq!(report.host_count(), 2);
    assert_eq!(
        report.find_host("10.0.0.9").unwrap().os_name().unwrap(),
        "Linux Kernel 2.6"
    );
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.nessus");

    let err = load_report_text(&path).unwrap_err();
    match err {
        ReportError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn hosts_share_the_document_options() {
    let options = HostOptions {
        scope: nessus_core::Scope::Subtree,
        ..HostOptions::default()
    };
    let report = ReportDocument::parse(TWO_HOSTS, options).unwrap();

    assert!(report.hosts().iter().all(|host| *host.options() == options));
}
