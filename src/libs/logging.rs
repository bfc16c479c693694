//! Tracing bootstrap for embedding applications.
//!
//! The library itself only emits events; the hosting process decides whether
//! anything listens. Calling [`init`] once at startup installs a formatting
//! subscriber filtered by `RUST_LOG` (tracing stays off when the variable is
//! unset or invalid). Repeated calls are ignored.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global tracing subscriber. Idempotent; never panics.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .and_then(|raw| {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                EnvFilter::try_new(raw).ok()
            })
            .unwrap_or_else(|| EnvFilter::new("off"));

        // try_init: the host may have installed its own subscriber already.
        let _ = tracing_subscriber::registry().with(fmt::layer()).with(filter).try_init();
    });
}
