//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `buildshelf_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any
    // transport layer.
    println!("buildshelf_core ping={}", buildshelf_core::ping());
    println!("buildshelf_core version={}", buildshelf_core::core_version());
    println!(
        "buildshelf_core schema_version={}",
        buildshelf_core::db::migrations::latest_version()
    );
}
