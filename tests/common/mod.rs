use assert_cmd::Command;
use std::path::Path;

/// `jabbrev` command isolated inside `root`: preferences in `root/preferences.toml`,
/// data under `root/data`.
pub fn jabbrev_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jabbrev").unwrap();
    cmd.env("JABBREV_CONFIG", root.join("preferences.toml"));
    cmd.env("JABBREV_DATA_DIR", root.join("data"));
    cmd.env_remove("RUST_LOG");
    cmd
}
