use std::env;
use std::process::Command;

fn main() {
    // Compiler identification for the report header.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .unwrap_or_else(|| "rustc (unknown version)".to_owned());

    let profile = env::var("PROFILE").unwrap_or_default();

    println!("cargo:rustc-env=ZMORTON_RUSTC_VERSION={}", version);
    println!("cargo:rustc-env=ZMORTON_BUILD_PROFILE={}", profile);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
