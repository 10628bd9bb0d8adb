//! Global Async Runtime
//!
//! Provides a shared Tokio runtime for the file I/O behind import and export.
//! Commands run on Neovim's main thread and wait for their I/O with `block_on`.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Global shared Tokio runtime, initialized lazily on first use
pub static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime")
});

/// Run a future to completion (blocking the current thread)
///
/// Must not be called from inside another Tokio runtime.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
