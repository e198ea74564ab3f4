//! # Observability & Tracing
//!
//! Structured logging for the ledger and everything built on it.
//!
//! The actor logs every operation with an `entity_type` field (e.g. `Product`) plus the
//! entry id, ledger size or total where relevant. Client methods are wrapped in
//! `#[tracing::instrument]` spans.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per ledger change
//! RUST_LOG=debug cargo run     # plus edit payloads, reads and totals
//! ```
//!
//! With `RUST_LOG=info` a delete on a single-row form reads:
//!
//! ```text
//! INFO Removed entity_type="Product" id=1 size=0
//! INFO Added entity_type="Product" id=1 size=1
//! ```
//!
//! The actor runs in its own task, so its lines carry no caller span; the client side
//! `Sending request` lines at `debug` level do.

/// Installs the global subscriber: `RUST_LOG` filtering, compact format, no module paths.
///
/// Panics if a global subscriber is already installed; call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}

/// Like [`setup_tracing`], but writes through the test harness and tolerates being called
/// from many tests.
pub fn try_setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
