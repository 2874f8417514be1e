#[allow(dead_code)]
mod common;

use common::*;
use predicates::prelude::predicate;

#[test]
fn test_confirm_with_approve_fallback() {
    let helper = PopupTestHelper::new("test_confirm_with_approve_fallback");

    helper
        .run_command(&["--fallback", "approve", "confirm", "Delete branch?"])
        .success()
        .stdout(predicate::str::contains("true"))
        .stdout(predicate::str::contains("Confirm Action"));

    helper.clean_work_dir();
}

#[test]
fn test_confirm_with_deny_fallback() {
    let helper = PopupTestHelper::new("test_confirm_with_deny_fallback");

    helper
        .run_command(&["--fallback", "deny", "confirm", "Delete branch?"])
        .code(1)
        .stdout(predicate::str::contains("false"));

    helper.clean_work_dir();
}

#[test]
fn test_confirm_without_tty_declines() {
    let helper = PopupTestHelper::new("test_confirm_without_tty_declines");

    helper
        .run_command(&["confirm", "Continue?"])
        .code(1)
        .stdout(predicate::str::contains("false"));

    helper.clean_work_dir();
}

#[test]
fn test_alert_completes() {
    let helper = PopupTestHelper::new("test_alert_completes");

    helper
        .run_command(&[
            "--fallback",
            "approve",
            "alert",
            "Build finished",
            "--title",
            "CI",
            "--severity",
            "success",
        ])
        .success()
        .stdout(predicate::str::contains("Build finished"))
        .stdout(predicate::str::contains("CI"));

    helper
        .run_command(&["--fallback", "log", "alert", "Quiet"])
        .success();

    helper.clean_work_dir();
}

#[test]
fn test_unknown_severity_is_rejected() {
    let helper = PopupTestHelper::new("test_unknown_severity_is_rejected");

    helper
        .run_command(&["alert", "x", "--severity", "fatal"])
        .code(2)
        .stderr(predicate::str::contains("fatal"));

    helper.clean_work_dir();
}

#[test]
fn test_unknown_config_keys_are_rejected() {
    let helper = PopupTestHelper::new("test_unknown_config_keys_are_rejected");

    helper
        .run_command(&[
            "--fallback",
            "approve",
            "confirm",
            "x",
            "--config-json",
            r#"{"bogus": true}"#,
        ])
        .code(2)
        .stdout(predicate::str::contains("unknown field"));

    helper.clean_work_dir();
}

#[test]
fn test_show_prints_null() {
    let helper = PopupTestHelper::new("test_show_prints_null");

    helper
        .run_command(&["show", "--json", r#"{"fields": ["name", "email"]}"#])
        .success()
        .stdout(predicate::str::contains("null"));

    helper
        .run_command(&["show", "--form"])
        .success()
        .stdout(predicate::str::contains("null"));

    helper.clean_work_dir();
}

#[test]
fn test_settings_file_selects_fallback() {
    let helper = PopupTestHelper::new("test_settings_file_selects_fallback");
    let settings = helper.write_settings("fallback: approve\n");

    helper
        .run_command(&["--settings", &settings, "confirm", "Proceed?"])
        .success()
        .stdout(predicate::str::contains("true"));

    helper
        .run_command(&["--settings", &settings, "--fallback", "deny", "confirm", "Proceed?"])
        .code(1);

    helper.clean_work_dir();
}

#[test]
fn test_bad_settings_file_fails() {
    let helper = PopupTestHelper::new("test_bad_settings_file_fails");
    let settings = helper.write_settings("fallback: maybe\n");

    helper
        .run_command(&["--settings", &settings, "confirm", "Proceed?"])
        .code(2)
        .stdout(predicate::str::contains("Failed to load configuration"));

    helper.clean_work_dir();
}
