//! Spinner Progress Reporter
//!
//! ProgressReporter backed by an indicatif spinner. All mutations of the
//! shared state and all printed lines go through one mutex.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::domain::entities::severity::Severity;
use crate::domain::repositories::progress_reporter::ProgressReporter;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const SUCCESS_MARKER: &str = "✔";
const FAILURE_MARKER: &str = "💥";

/// Snapshot of the live counter and indicator color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    pub completed: usize,
    pub total: usize,
    pub severity: Severity,
    pub finished: bool,
}

pub struct SpinnerReporter {
    bar: ProgressBar,
    state: Mutex<ProgressState>,
}

fn spinner_style(severity: Severity) -> ProgressStyle {
    let template = format!(
        "{{spinner:.{}}} {{msg}} - Elapsed Time [{{elapsed}}]",
        severity.color()
    );
    ProgressStyle::with_template(&template).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn finished_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

impl SpinnerReporter {
    /// Spinner drawn on stderr, ticking until `finish`
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(TICK_INTERVAL);
        Self::with_bar(bar, message)
    }

    /// Reporter that never draws the spinner; status lines still print
    pub fn hidden(message: &str) -> Self {
        Self::with_bar(
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()),
            message,
        )
    }

    fn with_bar(bar: ProgressBar, message: &str) -> Self {
        bar.set_style(spinner_style(Severity::Normal));
        bar.set_message(message.to_string());
        Self {
            bar,
            state: Mutex::new(ProgressState::default()),
        }
    }

    #[cfg(test)]
    fn state(&self) -> ProgressState {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, ProgressState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProgressReporter for SpinnerReporter {
    fn write_line(&self, text: &str) {
        let _state = self.lock();
        self.bar.suspend(|| println!("{}", text));
    }

    fn set_progress(&self, done: usize, total: usize) {
        let mut state = self.lock();
        if state.finished {
            return;
        }
        state.total = total;
        state.completed = done.min(total);
        self.bar.set_message(format!(
            "Completed {} of {} files",
            state.completed, state.total
        ));
    }

    fn mark_severity(&self, level: Severity) {
        let mut state = self.lock();
        let next = state.severity.transition(level);
        if next != state.severity && !state.finished {
            self.bar.set_style(spinner_style(next));
        }
        state.severity = next;
    }

    fn severity(&self) -> Severity {
        self.lock().severity
    }

    fn finish(&self, all_succeeded: bool) {
        let mut state = self.lock();
        if state.finished {
            return;
        }
        state.finished = true;

        let marker = if all_succeeded {
            SUCCESS_MARKER
        } else {
            FAILURE_MARKER
        };
        let message = format!("{} {}", marker, self.bar.message());

        if self.bar.is_hidden() {
            println!("{}", message);
        }
        self.bar.set_style(finished_style());
        self.bar.finish_with_message(message);
    }
}
