use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    // The version endpoint reports a commit SHA, but builds must also work
    // from a plain source archive without a .git directory.
    let in_git_checkout = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let result = if in_git_checkout {
        EmitBuilder::builder()
            .build_timestamp()
            .git_sha(false)
            .emit()
    } else {
        EmitBuilder::builder().build_timestamp().emit()
    };

    result.expect("Unable to generate build metadata");
}
