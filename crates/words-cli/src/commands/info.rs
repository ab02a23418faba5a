//! Info command implementation.

/// Run the info command.
pub fn run() {
    println!("numwords");
    println!("========");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Crates:");
    println!("  words-core: Core types, config and errors");
    println!("  num-words: Number to words conversion (VI/EN)");
    println!("  words-cli: This CLI tool");
}
