//! Bridge between the recalculation dispatcher and TUI messages.

use crossbeam_channel::Sender;

use exitload_core::result::CalculationResult;
use exitload_orchestration::error::ServiceError;
use exitload_orchestration::interfaces::ResultsPresenter;

use crate::messages::TuiMessage;

/// TUI results presenter that forwards outcomes to the update loop.
pub struct TuiResultsPresenter {
    tx: Sender<TuiMessage>,
}

impl TuiResultsPresenter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl ResultsPresenter for TuiResultsPresenter {
    fn present_result(&self, result: &CalculationResult) {
        let _ = self.tx.send(TuiMessage::Result(Box::new(result.clone())));
    }

    fn present_error(&self, error: &ServiceError) {
        let _ = self.tx.send(TuiMessage::ServiceError(error.to_string()));
    }
}
