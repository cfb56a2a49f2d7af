use assert_cmd::Command;
use mockito::{Matcher, Server, ServerGuard};
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ENGINE_VARS: &[&str] = &[
    "CSE_INVESTIGATIVE",
    "CSE_MEDIA",
    "CSE_OFFICIAL",
    "CSE_INTERNATIONAL",
    "CSE_REGIONAL",
    "CSE_BUSINESS",
];

/// Command with a clean environment and HOME pointed at `home`
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coritool").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("OPENSANCTIONS_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("CORITOOL_CONFIG")
        .env_remove("RUST_LOG");
    for var in ENGINE_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Write a config file routing both sources to `server`
fn write_config(home: &TempDir, server: &Server) -> PathBuf {
    let path = home.path().join("coritool.toml");
    let contents = format!(
        "[endpoints]\n\
         sanctions_url = \"{url}\"\n\
         search_url = \"{url}/customsearch/v1\"\n\
         sanctions_timeout_secs = 5\n\
         search_timeout_secs = 5\n",
        url = server.url()
    );
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help() {
    let home = TempDir::new().unwrap();
    cmd(&home).arg("--help").assert().success().stdout(contains("--schema"));
}

#[test]
fn entity_required() {
    let home = TempDir::new().unwrap();
    cmd(&home).assert().failure();
}

#[test]
fn missing_keys_abort_before_any_request() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let any = server.mock("GET", Matcher::Any).expect(0).create();
    let config = write_config(&home, &server);

    cmd(&home)
        .args(["John Smith", "-c", config.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(contains(
            "Error: Missing API keys. Set OPENSANCTIONS_API_KEY and GOOGLE_API_KEY as environment variables.",
        ));

    any.assert();
}

#[test]
fn empty_key_counts_as_missing() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "")
        .arg("John Smith")
        .assert()
        .failure()
        .stderr(contains("Set GOOGLE_API_KEY as environment variables."));
}

#[test]
fn invalid_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    fs::write(&path, "[endpoints\nsearch_url = ").unwrap();

    cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "g-key")
        .args(["John Smith", "-c", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Error: TOML parsing error"));
}

#[test]
fn missing_explicit_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("missing.toml");

    cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "g-key")
        .args(["John Smith", "-c", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Configuration error: Config file not found"));
}

/// Sanctions answers one relevant hit per lookup; the investigative engine
/// answers one kickback story per query.
fn high_risk_server() -> ServerGuard {
    let mut server = Server::new();
    server
        .mock("GET", "/search/default")
        .match_query(Matcher::UrlEncoded("schema".into(), "Company".into()))
        .match_header("authorization", "ApiKey os-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"results": [{"caption": "Acme Energy LLC", "datasets": ["ua_nsdc_sanctions"], "properties": {"topics": ["sanction"]}}]}"#,
        )
        .expect(2)
        .create();
    server
        .mock("GET", "/customsearch/v1")
        .match_query(Matcher::UrlEncoded("cx".into(), "cx-inv".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items": [{"title": "Tender review", "snippet": "Alleged kickback on grid repairs"}]}"#,
        )
        .create();
    server
}

#[test]
fn end_to_end_text_report() {
    let home = TempDir::new().unwrap();
    let server = high_risk_server();
    let config = write_config(&home, &server);

    cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "g-key")
        .env("CSE_INVESTIGATIVE", "cx-inv")
        .args(["Acme Energy", "--schema", "Company", "--no-color", "-c", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("ENTITY: Acme Energy"))
        .stdout(contains("OVERALL RISK: HIGH (10/10)"))
        .stdout(contains("Reconstruction / Donor Risk:\nMedium-High:"))
        .stdout(contains("Note: This is a public OSINT triage output. Manual review required."));
}

#[test]
fn end_to_end_details() {
    let home = TempDir::new().unwrap();
    let server = high_risk_server();
    let config = write_config(&home, &server);

    cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "g-key")
        .env("CSE_INVESTIGATIVE", "cx-inv")
        .args(["Acme Energy", "--schema", "Company", "--no-color", "--details"])
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("  - Energy Acme"))
        .stdout(contains("Keyword boost"))
        .stdout(contains("[Energy Acme] Acme Energy LLC | ua_nsdc_sanctions | sanction"));
}

#[test]
fn end_to_end_json_report() {
    let home = TempDir::new().unwrap();
    let server = high_risk_server();
    let config = write_config(&home, &server);

    let out = cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "g-key")
        .env("CSE_INVESTIGATIVE", "cx-inv")
        .args(["Acme Energy", "--schema", "company", "-f", "json", "-c", config.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(value["score"], 10);
    assert_eq!(value["level"], "HIGH");
    assert_eq!(value["sanctions_hits"], 2);
    assert_eq!(value["breakdown"]["sanctions"], 6);
    assert_eq!(value["breakdown"]["boost"], 6);
    assert_eq!(value["variants"].as_array().unwrap().len(), 2);
    assert_eq!(value["matched_keywords"][0], "kickback");
}

#[test]
fn source_outage_still_reports() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/search/default")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream down")
        .create();
    let config = write_config(&home, &server);

    cmd(&home)
        .env("OPENSANCTIONS_API_KEY", "os-key")
        .env("GOOGLE_API_KEY", "g-key")
        .args(["John Smith", "--no-color", "-c", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("OVERALL RISK: LOW (0/10)"))
        .stdout(contains("Low: No direct reconstruction-related corruption signals identified."));
}
