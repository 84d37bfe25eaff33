//! End-to-end conversion tests through the public API

use hostrule_engine::{
    classify, convert, convert_text, Conversion, Platform, Session, Template,
};

const HOSTS: &str = "117.80.117.48 baidu.com
# comment line
192.168.1.1 example.com
117.80.117.48 baidu.com";

#[test]
fn test_reference_example() {
    let records = classify(HOSTS);
    assert_eq!(records.len(), 4);

    let template = Template::new("${host}=${ip},");
    let result = convert(&records, Some(&template), true);

    assert_eq!(
        result.as_text(),
        "baidu.com=117.80.117.48,\n# comment line\nexample.com=192.168.1.1,"
    );
}

#[test]
fn test_charles_block_per_entry() {
    let session = Session::new(Platform::Charles);
    let result = convert_text("::1 localhost\n127.0.0.1 localhost", &session);

    let expected = "<dnsSpoof>
  <name>localhost</name>
  <address>::1</address>
  <enabled>true</enabled>
</dnsSpoof>
<dnsSpoof>
  <name>localhost</name>
  <address>127.0.0.1</address>
  <enabled>true</enabled>
</dnsSpoof>";
    assert_eq!(result, Conversion::Rendered(expected.to_string()));
}

#[test]
fn test_session_override_and_dedupe_toggle() {
    let session = Session::new(Platform::Clash).with_override(&Platform::Clash, "${ip}\t${host}");

    let plain = convert_text(HOSTS, &session);
    assert_eq!(plain.as_text().lines().count(), 4);

    let deduped = convert_text(HOSTS, &session.with_dedupe(true));
    assert_eq!(
        deduped.as_text(),
        "117.80.117.48\tbaidu.com\n# comment line\n192.168.1.1\texample.com"
    );
}

#[test]
fn test_permissive_ipv4() {
    let result = convert_text("999.999.999.999 example.com", &Session::default());
    assert_eq!(result.as_text(), "example.com=999.999.999.999,");
}

#[test]
fn test_sentinel_priority() {
    let custom = Session::new(Platform::Custom);
    assert_eq!(convert_text("", &custom), Conversion::NoValidEntries);
    assert_eq!(convert_text("# nothing here", &custom), Conversion::NoValidEntries);
    assert_eq!(
        convert_text("10.1.1.1 intranet", &custom),
        Conversion::NoTemplateConfigured
    );
}
