//! Platform Timer Utilities
//!
//! Timers used by the form (simulated submission delay, notification
//! auto-dismiss) go through here so the same code runs in the browser and
//! under native tests.

/// Wait for `ms` milliseconds without blocking the event loop
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Wait for `ms` milliseconds without blocking the event loop
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
