//! Git testing utilities

use std::path::Path;
use std::process::Command;

/// Runs git in `path` and returns success plus combined stdout/stderr.
pub fn git(path: &Path, args: &[&str]) -> (bool, String) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("failed to spawn git");
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    (output.status.success(), text)
}

/// Whether a usable git binary is on the PATH; tests skip themselves when it
/// is missing.
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initializes a repository with test user config and signing disabled.
pub fn setup_git_repo(path: &Path) {
    std::fs::create_dir_all(path).unwrap();
    let (ok, out) = git(path, &["init"]);
    assert!(ok, "git init failed: {out}");
    configure_test_user(path);
}

/// Sets the user config commits need in a fresh repository.
pub fn configure_test_user(path: &Path) {
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Initializes a bare repository to stand in for the remote.
pub fn init_bare_repo(path: &Path) {
    std::fs::create_dir_all(path).unwrap();
    let (ok, out) = git(path, &["init", "--bare"]);
    assert!(ok, "git init --bare failed: {out}");
}

/// Writes a file, stages it and commits it.
pub fn create_commit(path: &Path, file_name: &str, content: &str, message: &str) {
    std::fs::write(path.join(file_name), content).unwrap();
    git(path, &["add", file_name]);
    let (ok, out) = git(path, &["commit", "-m", message]);
    assert!(ok, "git commit failed: {out}");
}

/// Total number of commits reachable in a repository.
pub fn commit_count(path: &Path) -> usize {
    let (ok, out) = git(path, &["rev-list", "--count", "--all"]);
    assert!(ok, "git rev-list failed: {out}");
    out.trim().parse().unwrap()
}
