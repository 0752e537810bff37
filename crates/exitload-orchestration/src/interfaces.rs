//! Orchestration interfaces.

use parking_lot::Mutex;

use exitload_core::request::CalculationRequest;
use exitload_core::result::CalculationResult;

use crate::error::ServiceError;

/// Something that turns a request into a result, typically over HTTP.
pub trait CalculationService: Send + Sync {
    /// Perform one calculation.
    fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, ServiceError>;
}

/// Trait for presenting calculation outcomes to the user.
pub trait ResultsPresenter: Send + Sync {
    /// Present the freshest calculation result.
    fn present_result(&self, result: &CalculationResult);

    /// Present a failed calculation. The previous result stays on screen.
    fn present_error(&self, error: &ServiceError);
}

/// Presenter that records everything it is shown.
#[derive(Default)]
pub struct CollectingPresenter {
    results: Mutex<Vec<CalculationResult>>,
    errors: Mutex<Vec<ServiceError>>,
}

impl CollectingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Results presented so far, oldest first.
    #[must_use]
    pub fn results(&self) -> Vec<CalculationResult> {
        self.results.lock().clone()
    }

    /// Most recently presented result.
    #[must_use]
    pub fn latest(&self) -> Option<CalculationResult> {
        self.results.lock().last().cloned()
    }

    /// Errors presented so far, oldest first.
    #[must_use]
    pub fn errors(&self) -> Vec<ServiceError> {
        self.errors.lock().clone()
    }
}

impl ResultsPresenter for CollectingPresenter {
    fn present_result(&self, result: &CalculationResult) {
        self.results.lock().push(result.clone());
    }

    fn present_error(&self, error: &ServiceError) {
        self.errors.lock().push(error.clone());
    }
}
