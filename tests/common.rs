// tests/common.rs
//! Shared test utilities — logging setup

/// Initialize test-friendly tracing; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
