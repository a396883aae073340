//! Console rendering of pipeline progress

use indicatif::ProgressBar;
use std::sync::Mutex;
use tracing::debug;
use webgen_core::Error;
use webgen_scaffold::{Phase, PhaseObserver};

use crate::output;

/// Prints phase progress; shows a spinner while dependencies install
#[derive(Default)]
pub struct ConsoleObserver {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleObserver {
    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl PhaseObserver for ConsoleObserver {
    fn on_phase_start(&self, phase: Phase) {
        match phase {
            Phase::Initialize => output::banner(),
            Phase::Resolve => output::rule(),
            Phase::Install => {
                if let Ok(mut slot) = self.spinner.lock() {
                    *slot = Some(output::spinner("Installing dependencies..."));
                }
            }
            _ => {}
        }
    }

    fn on_phase_skipped(&self, phase: Phase) {
        debug!("Skipped phase {}", phase);
    }

    fn on_phase_complete(&self, phase: Phase) {
        if phase == Phase::Install {
            if let Some(pb) = self.take_spinner() {
                pb.finish_and_clear();
            }
            output::success("Dependencies installed");
        }
    }

    fn on_notice(&self, _phase: Phase, message: &str) {
        if let Ok(slot) = self.spinner.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(message.to_string());
                return;
            }
        }
        output::info(message);
    }

    fn on_phase_failed(&self, phase: Phase, error: &Error) {
        if let Some(pb) = self.take_spinner() {
            pb.abandon();
        }
        match error {
            Error::UserAbort => output::warning("Cancelled, nothing else will run"),
            _ => output::error(&format!("{} phase failed: {}", phase, error)),
        }
    }
}
