//! Phase progress observation
//!
//! The pipeline reports progress through [`PhaseObserver`]. The CLI renders
//! these events on the terminal; [`TracingObserver`] logs them instead.

use tracing::{debug, error, info};
use webgen_core::Error;

use super::phase::Phase;

/// Observer trait for pipeline phase events
pub trait PhaseObserver: Send + Sync {
    /// Called before a phase's action runs
    fn on_phase_start(&self, phase: Phase);

    /// Called when a phase's gate rejects it
    fn on_phase_skipped(&self, phase: Phase);

    /// Called after a phase's action settles successfully
    fn on_phase_complete(&self, phase: Phase);

    /// Called with a human-readable progress message from inside a phase
    fn on_notice(&self, phase: Phase, message: &str);

    /// Called once when a phase fails; no later phase runs afterwards
    fn on_phase_failed(&self, phase: Phase, error: &Error) {
        let _ = (phase, error);
    }
}

/// An observer that logs phase events using the `tracing` crate
///
/// # Log Levels
///
/// - `on_phase_start`, `on_notice`: INFO
/// - `on_phase_skipped`, `on_phase_complete`: DEBUG
/// - `on_phase_failed`: ERROR
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PhaseObserver for TracingObserver {
    fn on_phase_start(&self, phase: Phase) {
        info!(phase = %phase, "Starting phase");
    }

    fn on_phase_skipped(&self, phase: Phase) {
        debug!(phase = %phase, "Skipping phase");
    }

    fn on_phase_complete(&self, phase: Phase) {
        debug!(phase = %phase, "Phase complete");
    }

    fn on_notice(&self, phase: Phase, message: &str) {
        info!(phase = %phase, "{}", message);
    }

    fn on_phase_failed(&self, phase: Phase, error: &Error) {
        error!(phase = %phase, error = %error, "Phase failed");
    }
}
