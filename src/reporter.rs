//! Per-stage progress reporting.
//! The engine's contract with the progress display is exactly three signals
//! per stage: started, succeeded, failed.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Receives the observable outcome of each orchestration stage.
pub trait StageReporter {
    fn stage_started(&mut self, stage: &str);
    fn stage_succeeded(&mut self, stage: &str);
    fn stage_failed(&mut self, stage: &str);
}

/// Terminal spinner reporter; one spinner per running stage.
pub struct SpinnerReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        SpinnerReporter::new()
    }
}

impl StageReporter for SpinnerReporter {
    fn stage_started(&mut self, stage: &str) {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(stage.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stage_succeeded(&mut self, stage: &str) {
        self.finish();
        println!("✔ {}", stage);
    }

    fn stage_failed(&mut self, stage: &str) {
        self.finish();
        println!("✖ {}", stage);
    }
}
