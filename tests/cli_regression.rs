// Regression tests: end-to-end runs of the testgen binary in scratch
// directories. Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("testgen-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("tests")).unwrap();
    dir
}

fn testgen_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("testgen").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn generates_the_runner_and_reports_success() {
    let dir = scratch_dir("success");
    fs::write(
        dir.join("tests/test.json"),
        r#"[
            {"description": "Exit code pass-through", "command": ["./cmd return 0"]},
            {"description": "Writes log #", "command": ["./cmd stdout > log-#.txt", 1]}
        ]"#,
    )
    .unwrap();

    testgen_in(&dir)
        .assert()
        .success()
        .stdout(contains("Generated 2 tests"));

    let runner = fs::read_to_string(dir.join("tests/test-runner.c")).unwrap();
    assert!(runner.contains("static int test_1_exit_code_pass_through()"));
    assert!(runner.contains("return systemf1(\"./cmd stdout > log-2.txt\", 1);"));
    assert!(runner.contains("    puts(\"      2: Writes log #\");"));
    assert!(runner.contains("#define TEST_COUNT 2"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn regeneration_overwrites_the_previous_runner() {
    let dir = scratch_dir("overwrite");
    fs::write(dir.join("tests/test-runner.c"), "stale content").unwrap();
    fs::write(
        dir.join("tests/test.json"),
        r#"[{"description": "Only", "command": ["./cmd"]}]"#,
    )
    .unwrap();

    testgen_in(&dir)
        .assert()
        .success()
        .stdout(contains("Generated 1 test"));

    let runner = fs::read_to_string(dir.join("tests/test-runner.c")).unwrap();
    assert!(!runner.contains("stale content"));
    assert!(runner.contains("#define TEST_COUNT 1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn bad_json_exits_with_the_manifest_status() {
    let dir = scratch_dir("bad-json");
    fs::write(dir.join("tests/test.json"), "[{\"description\": ]").unwrap();

    testgen_in(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("testgen::manifest::parse"));

    assert!(!dir.join("tests/test-runner.c").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_manifest_exits_with_the_manifest_status() {
    let dir = scratch_dir("missing");

    testgen_in(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("testgen::manifest::parse"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unsupported_argument_exits_without_writing_output() {
    let dir = scratch_dir("unsupported");
    fs::write(
        dir.join("tests/test.json"),
        r#"[{"description": "Float timeout", "command": ["./cmd", 1.5]}]"#,
    )
    .unwrap();

    testgen_in(&dir)
        .assert()
        .failure()
        .code(3)
        .stderr(contains("1.5").and(contains("testgen::emit::unsupported_argument")));

    assert!(!dir.join("tests/test-runner.c").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn stray_arguments_are_rejected() {
    let dir = scratch_dir("stray");

    testgen_in(&dir).arg("extra").assert().failure();

    assert!(!dir.join("tests/test-runner.c").exists());
    let _ = fs::remove_dir_all(&dir);
}
