//! Subscriber setup for binaries that embed this crate.
//!
//! The library modules only ever call `tracing::debug!`/`tracing::info!`;
//! none of them install a subscriber. A binary that wants those events on
//! stdout calls [`init`] once, at startup.

/// Installs a `tracing-subscriber` format layer reading `RUST_LOG` (default
/// `info`) for level filtering.
pub fn init() {
    tracing_subscriber::fmt::init();
}
