//! NDJSON event output for `werdegang check --json`.

mod common;

use common::TestEnv;

fn parse_events(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
        .collect()
}

#[test]
fn json_check_emits_start_and_complete_events() {
    let env = TestEnv::new();
    let result = env.run(&["check", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events = parse_events(&result.stdout);

    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.first().unwrap()["command"], "check");

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], true);
    assert_eq!(complete["errors"], 0);
    assert!(complete["passed"].as_u64().unwrap() > 0);
}

#[test]
fn json_check_emits_one_event_per_check() {
    let env = TestEnv::new();
    let result = env.run(&["check", "--json"]);
    let events = parse_events(&result.stdout);

    let checks: Vec<_> = events.iter().filter(|e| e["event"] == "check").collect();
    assert!(!checks.is_empty());
    for check in &checks {
        assert!(check["section"].is_string());
        assert!(check["name"].is_string());
        assert!(matches!(
            check["status"].as_str(),
            Some("pass" | "warning" | "error")
        ));
    }
}

#[test]
fn json_check_reports_errors_for_broken_content() {
    let env = TestEnv::new();
    let dir = env.write_broken_content("content");

    let result = env.run(&["check", "--json", "--content", dir.to_str().unwrap()]);
    assert!(!result.success);

    let events = parse_events(&result.stdout);
    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], false);
    assert!(complete["errors"].as_u64().unwrap() >= 2);

    assert!(events
        .iter()
        .any(|e| e["event"] == "check" && e["status"] == "error"));
}
