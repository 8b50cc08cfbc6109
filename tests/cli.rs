use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn catalog_lists_controls() {
    let env = TestEnv::new();
    env.cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(contains("A.5.1\tPolicies for information security"))
        .stdout(contains("A.7.2\tTermination and change of employment"));
}

#[test]
fn fresh_progress_is_zero() {
    let env = TestEnv::new();
    env.cmd()
        .arg("progress")
        .assert()
        .success()
        .stdout(contains("0.00%"));
}

#[test]
fn guide_prints_guidance() {
    let env = TestEnv::new();
    env.cmd()
        .args(["guide", "A.6.2"])
        .assert()
        .success()
        .stdout(contains("A.6.2 - Segregation of duties"))
        .stdout(contains("no individual has control over all aspects"));
}

#[test]
fn guide_unknown_control_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["guide", "A.9.9"])
        .assert()
        .failure()
        .stderr(contains("control 'A.9.9' does not exist"));
}

#[test]
fn list_json_envelope() {
    let env = TestEnv::new();
    let v = env.run_json(&["list"]);
    assert_eq!(v["ok"], serde_json::json!(true));
    assert_eq!(v["data"].as_array().expect("data array").len(), 6);
}
