//! Captures the compiling `rustc` version as `MB_RUSTC_VERSION`.

use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    // `rustc --version` prints e.g. "rustc 1.85.0 (4d91de4e4 2025-02-17)".
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(|v| format!("v{v}")))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=MB_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
