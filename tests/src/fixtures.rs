use nessus_core::{HostOptions, ReportDocument};

/// Two hosts. The first one's summary fields disagree with its items on purpose.
pub const TWO_HOSTS: &str = r#"<?xml version="1.0" ?>
<NessusClientData>
  <Report>
    <ReportName>Weekly internal scan</ReportName>
    <ReportHost>
      <HostName>10.0.0.5</HostName>
      <startTime>Tue Oct 27 10:59:58 2009</startTime>
      <stopTime>Tue Oct 27 11:00:02 2009</stopTime>
      <netbios_name>FILESRV01</netbios_name>
      <mac_addr>00:11:22:33:44:55</mac_addr>
      <dns_name>filesrv01.corp.example</dns_name>
      <os_name>Microsoft Windows Server 2003</os_name>
      <num_ports>213</num_ports>
      <num_lo>6</num_lo>
      <num_med>2</num_med>
      <num_hi>9</num_hi>
      <ReportItem>
        <port>general/tcp</port>
        <severity>0</severity>
        <pluginID>10180</pluginID>
        <pluginName>Ping the remote host</pluginName>
        <data>The remote host is up</data>
      </ReportItem>
      <ReportItem>
        <port>microsoft-ds (445/tcp)</port>
        <severity>3</severity>
        <pluginID>22194</pluginID>
        <pluginName>MS06-040: Vulnerability in Server service</pluginName>
      </ReportItem>
      <ReportItem>
        <port>netbios-ssn (139/tcp)</port>
        <severity>1</severity>
        <pluginID>10150</pluginID>
        <pluginName>Windows NetBIOS / SMB Remote Host Information Disclosure</pluginName>
      </ReportItem>
      <ReportItem>
        <port>http (80/tcp)</port>
        <severity>2</severity>
        <pluginID>11213</pluginID>
        <pluginName>HTTP TRACE / TRACK Methods Allowed</pluginName>
      </ReportItem>
    </ReportHost>
    <ReportHost>
      <HostName>10.0.0.9</HostName>
      <startTime></startTime>
      <stopTime>Tue Oct 27 11:20:00 2009</stopTime>
      <netbios_name></netbios_name>
      <mac_addr>aa:bb:cc:dd:ee:ff</mac_addr>
      <dns_name></dns_name>
      <os_name>Linux Kernel 2.6</os_name>
      <num_ports>0</num_ports>
      <num_lo>1</num_lo>
      <num_med>0</num_med>
      <num_hi>0</num_hi>
      <ReportItem>
        <port>ssh (22/tcp)</port>
        <severity>2</severity>
        <pluginID>10267</pluginID>
        <pluginName>SSH Server Type and Version Information</pluginName>
      </ReportItem>
      <ReportItem>
        <port>general/udp</port>
        <severity>0</severity>
        <pluginID>10287</pluginID>
        <pluginName>Traceroute Information</pluginName>
      </ReportItem>
    </ReportHost>
  </Report>
</NessusClientData>
"#;

/// A host block missing most of its fields, with one unreadable item.
pub const BROKEN_HOST: &str = r#"<NessusClientData>
  <Report>
    <ReportHost>
      <startTime>sometime</startTime>
      <stopTime>Tue Oct 27 11:20:00 2009</stopTime>
      <num_ports>many</num_ports>
      <num_lo>1</num_lo>
      <num_hi>1</num_hi>
      <ReportItem><severity>1</severity><pluginID>10150</pluginID></ReportItem>
      <ReportItem><severity>critical</severity><pluginID>10151</pluginID></ReportItem>
    </ReportHost>
  </Report>
</NessusClientData>
"#;

pub fn report(text: &'static str, options: HostOptions) -> ReportDocument<'static> {
    ReportDocument::parse(text, options).expect("fixture must parse")
}

pub fn two_hosts() -> ReportDocument<'static> {
    report(TWO_HOSTS, HostOptions::default())
}
