mod common;

use common::*;

#[test]
fn status_reports_available_service() {
    let server = StubServer::start();
    let dir = tempfile::tempdir().unwrap();

    let output = run_railgen(dir.path(), &server.base_url, &["status"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains(&server.base_url));
    assert!(out.contains("available"));
}

#[test]
fn status_fails_when_service_answers_503() {
    let server = StubServer::start_with(StubConfig {
        probe_status: 503,
        ..StubConfig::default()
    });
    let dir = tempfile::tempdir().unwrap();

    let output = run_railgen(dir.path(), &server.base_url, &["status"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("license service unavailable (HTTP 503)"));
}

#[test]
fn status_json_event() {
    let server = StubServer::start();
    let dir = tempfile::tempdir().unwrap();

    let output = run_railgen(dir.path(), &server.base_url, &["status", "--json"]);

    assert!(output.status.success());
    let events = events(&output);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "status");
    assert_eq!(events[0]["available"], true);
}

#[test]
fn unknown_config_key_is_reported_with_suggestion() {
    let server = StubServer::start();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("railgen.toml"),
        "[api]\ntimeout_sec = 5\n",
    )
    .unwrap();

    let output = run_railgen(dir.path(), &server.base_url, &["status", "--json"]);

    assert!(output.status.success());
    let events = events(&output);
    let warning = events
        .iter()
        .find(|e| e["event"] == "config_warning")
        .expect("config warning event");
    assert_eq!(warning["key"], "timeout_sec");
    assert_eq!(warning["line"], 2);
    assert_eq!(warning["suggestion"], "timeout_secs");
}
