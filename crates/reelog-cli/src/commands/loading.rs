use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use crate::output::Output;

/// Spinner on stderr while a network call runs. Only shown for human output
/// on a terminal; otherwise the message goes to the log.
pub struct Loading {
    spinner: Option<ProgressBar>,
}

impl Loading {
    pub fn start(message: &str, output: &Output) -> Self {
        let interactive = std::io::stderr().is_terminal() && !output.is_json() && !output.is_quiet();
        if !interactive {
            tracing::debug!(operation = "loading", message, "Loading");
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner: Some(spinner) }
    }

    pub fn finish(self) {
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

/// Runs `work` behind a spinner.
pub async fn with_spinner<F: Future>(message: &str, output: &Output, work: F) -> F::Output {
    let loading = Loading::start(message, output);
    let result = work.await;
    loading.finish();
    result
}
