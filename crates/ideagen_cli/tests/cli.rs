use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with a clean environment rooted at `home`.
fn ideagen(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ideagen"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("IDEAGEN_MODEL")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .output()
        .expect("run ideagen")
}

#[test]
fn test_help_lists_subcommands() {
    let home = tempfile::tempdir().unwrap();
    let output = ideagen(home.path(), &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["generate", "session", "styles", "config"] {
        assert!(stdout.contains(sub), "help should mention {sub}: {stdout}");
    }
}

#[test]
fn test_generate_without_key_fails_before_any_request() {
    let home = tempfile::tempdir().unwrap();
    let output = ideagen(
        home.path(),
        &["generate", "vegan breakfast recipes", "--model", "gpt-3.5-turbo"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"), "stderr: {stderr}");
}

#[test]
fn test_generate_with_blank_topic_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let output = ideagen(home.path(), &["generate", "   ", "--api-key", "sk-unused"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a topic"), "stderr: {stderr}");
}

#[test]
fn test_count_out_of_range_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = ideagen(home.path(), &["generate", "tea", "-n", "50"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 1 and 20"), "stderr: {stderr}");
}

#[test]
fn test_styles_json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = ideagen(home.path(), &["--output", "json", "styles"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: serde_json::Value =
        serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["level"], "list");
    assert_eq!(first["message"], "styles");
    assert_eq!(first["data"]["items"][2]["name"], "how-to");
}

#[test]
fn test_config_show_reports_override_masked() {
    let home = tempfile::tempdir().unwrap();
    let output = ideagen(
        home.path(),
        &["--output", "json", "config", "show", "--api-key", "sk-abcdefghijklmnop"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("abcdefghijklmnop"));
    let line: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(line["data"]["api_key"]["source"], "override");
    assert_eq!(line["data"]["api_key"]["masked"], "sk-a...mnop");
    assert_eq!(line["data"]["settings"]["model"], "gpt-3.5-turbo");
}

#[test]
fn test_session_reports_errors_and_keeps_going() {
    use std::io::Write;
    use std::process::Stdio;

    let home = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_ideagen"))
        .arg("session")
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("OPENAI_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn ideagen session");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"more\nexport csv\nset count 3\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No previous topic"), "stderr: {stderr}");
    assert!(stderr.contains("No ideas to export yet."), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("count 3"), "stdout: {stdout}");
}
