//! Integration tests for the hostrule CLI library
//!
//! These exercise the caller flow without spawning the binary: persisted config,
//! session resolution and conversion through the core.

use hostrule_cli::cli::ConvertArgs;
use hostrule_cli::commands::convert::{convert_input, explicit_template, session_for};
use hostrule_cli::commands::template::template_rows;
use hostrule_cli::output::TemplateSource;
use hostrule_cli::{Cli, Config};
use hostrule_domain::{Conversion, Platform};
use clap::Parser;
use tempfile::TempDir;

const HOSTS: &str = "117.80.117.48 baidu.com
# comment line
192.168.1.1 example.com
117.80.117.48 baidu.com";

#[test]
fn test_config_round_trip_drives_conversion() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.set_platform(&Platform::Custom);
    config.set_template(&Platform::Custom, "address=/${host}/${ip}".to_string());
    config.settings.dedupe = true;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);

    let session = session_for(&ConvertArgs::default(), &loaded);
    let (conversion, stats) = convert_input(HOSTS, &session, None).unwrap();

    assert_eq!(
        conversion.as_text(),
        "address=/baidu.com/117.80.117.48\n# comment line\naddress=/example.com/192.168.1.1"
    );
    assert_eq!(stats.duplicates_dropped, 1);
}

#[test]
fn test_parsed_flags_reach_the_core() {
    let cli = Cli::parse_from([
        "hostrule",
        "convert",
        "--platform",
        "clash",
        "--template",
        "${ip} ${host}",
        "--dedupe",
    ]);
    let args = match cli.command {
        Some(hostrule_cli::Command::Convert(args)) => args,
        _ => panic!("Expected Convert command"),
    };

    let session = session_for(&args, &Config::default());
    let template = explicit_template(&args).unwrap();
    let (conversion, _) = convert_input(HOSTS, &session, template).unwrap();

    assert_eq!(
        conversion.as_text(),
        "117.80.117.48 baidu.com\n# comment line\n192.168.1.1 example.com"
    );
}

#[test]
fn test_sentinels_pass_through() {
    let config = Config::default();
    let session = session_for(&ConvertArgs::default(), &config);

    let (conversion, _) = convert_input("# nothing\nlocalhost", &session, None).unwrap();
    assert_eq!(conversion, Conversion::NoValidEntries);

    let custom = session.with_platform(Platform::Custom);
    let (conversion, _) = convert_input("10.0.0.1 a.test", &custom, None).unwrap();
    assert_eq!(conversion, Conversion::NoTemplateConfigured);
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[settings\nplatform = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_template_listing_includes_user_platforms() {
    let mut config = Config::default();
    config.set_template(&Platform::parse("dnsmasq"), "address=/${host}/${ip}".to_string());

    let rows = template_rows(&config);
    let ids: Vec<&str> = rows.iter().map(|r| r.platform.as_str()).collect();
    assert_eq!(ids, vec!["clash", "charles", "custom", "dnsmasq"]);
    assert_eq!(rows[3].source, TemplateSource::User);
}
