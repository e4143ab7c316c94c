//! Common test infrastructure for pxl integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;

use pxl::RenderService;
use std::sync::OnceLock;

/// Shared render service. Loading system fonts is slow, so every test in a
/// binary reuses one instance.
pub fn service() -> &'static RenderService {
    static SERVICE: OnceLock<RenderService> = OnceLock::new();
    SERVICE.get_or_init(|| {
        init_tracing();
        RenderService::new()
    })
}

/// Route `tracing` output through the test harness. Set `RUST_LOG=pxl=debug`
/// to see render spans.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
