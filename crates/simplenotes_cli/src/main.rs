//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `simplenotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use simplenotes_core::{init_logging, RuntimeConfig};

fn main() {
    let config = RuntimeConfig::from_env();

    // Logging is optional for the probe; only bootstrap it when the host
    // names a directory.
    if let Ok(log_dir) = std::env::var("SIMPLE_NOTES_LOG_DIR") {
        if let Err(err) = init_logging(config.effective_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("simplenotes_core ping={}", simplenotes_core::ping());
    println!(
        "simplenotes_core version={}",
        simplenotes_core::core_version()
    );
    println!("log_level={}", config.effective_log_level());
}
