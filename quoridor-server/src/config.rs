// --- File: quoridor-room-server/quoridor-server/src/config.rs ---

//! Fixed server configuration (§6). These are constants, not a config file
//! or environment-driven layer — the specification calls them out as
//! non-configurable, so a `config` crate would be ceremony with no knob
//! behind it.

use std::time::Duration;

/// Hard wall-clock budget for one bot decision (§4.9 step 5).
pub const BOT_COMPUTE_BUDGET: Duration = Duration::from_secs(5);

/// Worker poll cadence (§4.9).
pub const WORKER_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Max pending jobs claimed per poll tick (§4.9).
pub const WORKER_BATCH_SIZE: usize = 10;

/// Compute times above this fraction of the budget are logged as warnings
/// (§4.9 Observability).
pub const BOT_BUDGET_WARN_RATIO: f64 = 0.8;
