//! iolift: migrate Java sources and notebooks to `IO.println`.
//!
//! The binary in `main.rs` is a thin argument dispatcher. Everything it
//! calls lives here so it can be tested without spawning a process:
//!
//! - [`commands`]: the `rewrite`, `notebook`, `normalize` and `regions`
//!   commands, plus the per-file pipeline they share
//! - [`discovery`]: target resolution, directory walking, `.ioliftignore`
//! - [`helper`]: the companion `IO.java` written next to rewritten files
//! - [`report`]: batch summaries and line diffs
//! - [`config`]: command-line flags

pub mod commands;
pub mod config;
pub mod discovery;
mod error;
pub mod helper;
pub mod report;

pub use error::{UnitError, UnitFailure};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
///
/// ```bash
/// RUST_LOG=iolift=debug iolift rewrite --check src/
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
