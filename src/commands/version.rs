//! Version command implementation

use console::style;

use crate::config::{CONFIG_FILE, DEFAULT_INTERNAL_PREFIX, DEFAULT_PASSES};
use crate::error::Result;
use crate::manifest::LOCK_MANIFEST;

/// Run version command
pub fn run() -> Result<()> {
    println!(
        "{} {}",
        style("deplock").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    for (label, value) in details() {
        println!("  {:<18}{value}", format!("{label}:"));
    }
    Ok(())
}

/// Build info followed by the defaults a fresh project runs with
fn details() -> Vec<(&'static str, String)> {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    vec![
        ("Build info", format!("{profile}, rust {}", env!("CARGO_PKG_RUST_VERSION"))),
        ("Settings file", CONFIG_FILE.to_string()),
        ("Lock manifest", LOCK_MANIFEST.to_string()),
        ("Internal prefix", DEFAULT_INTERNAL_PREFIX.to_string()),
        ("Write passes", DEFAULT_PASSES.to_string()),
    ]
}
