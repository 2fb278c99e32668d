use nessus_core::{HostError, HostOptions};

use crate::fixtures::{self, BROKEN_HOST};

#[test]
fn reads_identity_fields() {
    let report = fixtures::two_hosts();
    let hosts = report.hosts();
    let host = &hosts[0];

    assert_eq!(host.hostname().unwrap(), "10.0.0.5");
    assert_eq!(host.netbios_name().unwrap(), "FILESRV01");
    assert_eq!(host.mac_address().unwrap(), "00:11:22:33:44:55");
    assert_eq!(host.dns_name().unwrap(), "filesrv01.corp.example");
    assert_eq!(host.os_name().unwrap(), "Microsoft Windows Server 2003");
}

#[test]
fn empty_fields_are_empty_strings() {
    let report = fixtures::two_hosts();
    let hosts = report.hosts();
    let host = &hosts[1];

    assert_eq!(host.netbios_name().unwrap(), "");
    assert_eq!(host.dns_name().unwrap(), "");
    assert_eq!(host.netbios_name().unwrap(), "", "cached empty value changed");
}

#[test]
fn missing_hostname_is_field_not_found() {
    let report = fixtures::report(BROKEN_HOST, HostOptions::default());
    let hosts = report.hosts();

    let err = hosts[0].hostname().unwrap_err();
    assert_eq!(err, HostError::FieldNotFound { tag: "HostName" });
    assert_eq!(err.to_string(), "required field <HostName> not found");
    assert!(hosts[0].hostname().is_err(), "failure must not turn into a value");
}

#[test]
fn each_identity_names_its_tag() {
    let report = fixtures::report(BROKEN_HOST, HostOptions::default());
    let hosts = report.hosts();
    let host = &hosts[0];

    assert_eq!(host.netbios_name().unwrap_err(), HostError::not_found("netbios_name"));
    assert_eq!(host.mac_address().unwrap_err(), HostError::not_found("mac_addr"));
    assert_eq!(host.dns_name().unwrap_err(), HostError::not_found("dns_name"));
    assert_eq!(host.os_name().unwrap_err(), HostError::not_found("os_name"));
}

#[test]
fn scanned_ports_zero_is_none() {
    let report = fixtures::two_hosts();
    let hosts = report.hosts();

    assert_eq!(hosts[0].scanned_ports_count().unwrap(), Some(213));
    assert_eq!(hosts[1].scanned_ports_count().unwrap(), None);
}

#[test]
fn scanned_ports_garbage_is_malformed() {
    let report = fixtures::report(BROKEN_HOST, HostOptions::default());
    let hosts = report.hosts();
    let host = &hosts[0];

    assert_eq!(
        host.scanned_ports_count().unwrap_err(),
        HostError::MalformedCount {
            tag: "num_ports",
            value: "many".to_string()
        }
    );
}
