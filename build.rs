//! Build script for the BBQ salt calculator
//!
//! Increments a build number on each recompilation and embeds build metadata.
//! The counter lives in `OUT_DIR`, so it is per target profile and a
//! `cargo clean` starts it over.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=templates");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let build_number_path = out_dir.join("build_number.txt");

    let current_build: u64 = fs::read_to_string(&build_number_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let new_build = current_build + 1;

    fs::write(&build_number_path, new_build.to_string())
        .expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=BBQ_SALT_BUILD_NUMBER={}", new_build);
    println!("cargo:rustc-env=BBQ_SALT_BUILD_TIMESTAMP={}", timestamp);
}
