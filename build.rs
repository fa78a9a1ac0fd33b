use std::process::Command;

fn main() {
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", date);
    println!("cargo:rustc-env=GIT_HASH={}", git_hash().unwrap_or_else(|| "unknown".to_string()));
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
