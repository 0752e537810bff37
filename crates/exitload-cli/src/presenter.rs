//! CLI results presenter.

use parking_lot::Mutex;
use tracing::error;

use exitload_core::result::CalculationResult;
use exitload_core::view::ResultsView;
use exitload_orchestration::error::ServiceError;
use exitload_orchestration::interfaces::ResultsPresenter;

use crate::output::{render_json, render_quiet, render_text};
use crate::ui::print_error;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    Quiet,
}

/// CLI results presenter.
///
/// Applies each result to a [`ResultsView`], renders it in the configured
/// mode, prints it to stdout, and keeps the rendering for `--output`.
pub struct CliResultsPresenter {
    mode: OutputMode,
    details: bool,
    echo: bool,
    view: Mutex<ResultsView>,
    rendered: Mutex<Option<String>>,
}

impl CliResultsPresenter {
    #[must_use]
    pub fn new(mode: OutputMode, details: bool) -> Self {
        Self {
            mode,
            details,
            echo: true,
            view: Mutex::new(ResultsView::new()),
            rendered: Mutex::new(None),
        }
    }

    /// Render without printing to stdout.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// The last rendered report, if any result was presented.
    #[must_use]
    pub fn rendered(&self) -> Option<String> {
        self.rendered.lock().clone()
    }

    fn render(&self, view: &ResultsView) -> String {
        match self.mode {
            OutputMode::Text => render_text(view, self.details),
            OutputMode::Quiet => render_quiet(view),
            OutputMode::Json => match render_json(view, self.details) {
                Ok(mut json) => {
                    json.push('\n');
                    json
                }
                Err(e) => {
                    error!(error = %e, "failed to serialize report");
                    String::new()
                }
            },
        }
    }
}

impl ResultsPresenter for CliResultsPresenter {
    fn present_result(&self, result: &CalculationResult) {
        let mut view = self.view.lock();
        view.apply(result);
        let report = self.render(&view);
        if self.echo {
            print!("{report}");
        }
        *self.rendered.lock() = Some(report);
    }

    fn present_error(&self, error: &ServiceError) {
        if self.echo {
            print_error(&format!("calculation failed: {error}"));
        }
    }
}
