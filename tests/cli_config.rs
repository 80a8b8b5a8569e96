//! Configuration failures stop the run before any provider call.

mod common;

use common::TestEnv;

#[test]
fn test_auto_and_interactive_are_rejected() {
    let env = TestEnv::new();
    let result = env.run_with_env(
        &["--auto", "--interactive"],
        &[("BCE_ACCESS_KEY", "ak"), ("BCE_SECRET_KEY", "sk")],
    );

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("--auto and --interactive cannot be used together"),
        "got:\n{}",
        result.combined_output()
    );
}

#[test]
fn test_missing_credentials_explains_every_source() {
    let env = TestEnv::new();
    let result = env.run(&["--dry-run"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("BCE_ACCESS_KEY"));
    assert!(result.stderr.contains("BCE_SECRET_KEY"));
    assert!(result.stderr.contains("--ak"));
    assert!(result.stdout.is_empty(), "nothing should reach stdout:\n{}", result.stdout);
}

#[test]
fn test_secret_key_alone_is_not_enough() {
    let env = TestEnv::new();
    let result = env.run(&["--sk", "only-secret", "--list-all"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing credentials"));
}

#[test]
fn test_explicit_config_must_exist() {
    let env = TestEnv::new();
    let missing = env.path("nowhere/config.toml");
    let result = env.run(&["--config", missing.to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("nowhere"),
        "error should name the file; got:\n{}",
        result.stderr
    );
}

#[test]
fn test_unparseable_config_is_an_error() {
    let env = TestEnv::new();
    let path = env.write("bad.toml", "[credentials\naccess_key = ");
    let result = env.run(&["--config", path.to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config"));
}

#[test]
fn test_unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    let path = env.write(
        "config.toml",
        "[credentials]\naccess_kye = \"ak\"\n",
    );
    let result = env.run(&["--config", path.to_str().unwrap()]);

    // Still no usable credentials, but the typo is reported first.
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("access_kye"), "got:\n{}", result.stderr);
    assert!(result.stderr.contains("access_key"));
}

#[test]
fn test_default_location_config_is_read() {
    let env = TestEnv::new();
    env.write(
        ".config/bce-cert-cleaner/config.toml",
        "[credentials]\naccess_key = \"ak\"\n\n[log]\nfile = \"/nonexistent-dir/for/sure/cleaner.log\"\n",
    );
    let result = env.run_with_env(&["--dry-run"], &[("BCE_SECRET_KEY", "sk")]);

    // Credentials resolve from file plus env; the log destination then fails.
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("cannot open log file"),
        "got:\n{}",
        result.combined_output()
    );
}
