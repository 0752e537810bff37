//! Recalculation dispatch with freshest-result sequencing.
//!
//! Every settled field change calls [`RecalcDispatcher::submit`]. The request
//! is tagged with a sequence number and sent from its own worker thread; the
//! outcome comes back over a channel as an [`Envelope`]. The UI thread hands
//! envelopes to [`RecalcDispatcher::deliver`], which presents an outcome
//! only if it answers the newest request seen so far. A failure counts as an
//! answer, so an older success arriving after it is discarded.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use tracing::{debug, error, warn};

use exitload_core::request::{CalculationRequest, RequestError};
use exitload_core::result::CalculationResult;
use exitload_core::sequence::SequenceGate;
use exitload_core::sync::FieldValues;

use crate::error::ServiceError;
use crate::interfaces::{CalculationService, ResultsPresenter};

/// Outcome of one request, tagged with its sequence number.
#[derive(Debug)]
pub struct Envelope {
    pub seq: u64,
    pub outcome: Result<CalculationResult, ServiceError>,
}

/// What [`RecalcDispatcher::deliver`] did with an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Result presented.
    Applied,
    /// Outcome superseded by a fresher one and discarded.
    Stale,
    /// Request failed; the error was logged and presented.
    Failed,
}

/// Sends calculation requests in the background and applies only the
/// freshest response.
#[derive(Clone)]
pub struct RecalcDispatcher {
    service: Arc<dyn CalculationService>,
    gate: Arc<SequenceGate>,
    tx: Sender<Envelope>,
    rx: Receiver<Envelope>,
}

impl RecalcDispatcher {
    #[must_use]
    pub fn new(service: Arc<dyn CalculationService>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            service,
            gate: Arc::new(SequenceGate::new()),
            tx,
            rx,
        }
    }

    /// Build a request from `values` and send it. Returns the request's
    /// sequence number, or the reason it was suppressed.
    pub fn submit(&self, values: &FieldValues) -> Result<u64, RequestError> {
        match CalculationRequest::from_values(values) {
            Ok(request) => Ok(self.dispatch(request)),
            Err(e) => {
                debug!(error = %e, "calculation request suppressed");
                Err(e)
            }
        }
    }

    /// Send an already-built request on a worker thread.
    pub fn dispatch(&self, request: CalculationRequest) -> u64 {
        let seq = self.gate.next();
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = service.calculate(&request);
            let _ = tx.send(Envelope { seq, outcome });
        });
        debug!(seq, "calculation request dispatched");
        seq
    }

    /// Present an envelope if it answers the newest request seen so far.
    pub fn deliver(&self, envelope: Envelope, presenter: &dyn ResultsPresenter) -> Delivery {
        let seq = envelope.seq;
        let fresh = self.gate.accept(seq);
        match envelope.outcome {
            Ok(result) if fresh => {
                presenter.present_result(&result);
                Delivery::Applied
            }
            Err(e) if fresh => {
                error!(seq, error = %e, "exit load calculation failed");
                presenter.present_error(&e);
                Delivery::Failed
            }
            Ok(_) => {
                debug!(
                    seq,
                    seen = self.gate.last_seen(),
                    "discarded stale calculation result"
                );
                Delivery::Stale
            }
            Err(e) => {
                warn!(seq, error = %e, "superseded calculation request failed");
                Delivery::Stale
            }
        }
    }

    /// Deliver every envelope that has already arrived. Returns how many
    /// were handled.
    pub fn drain(&self, presenter: &dyn ResultsPresenter) -> usize {
        let mut handled = 0;
        while let Ok(envelope) = self.rx.try_recv() {
            self.deliver(envelope, presenter);
            handled += 1;
        }
        handled
    }

    /// Wait up to `timeout` for the next envelope.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Envelope, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sequence number of the most recent request.
    #[must_use]
    pub fn last_issued(&self) -> u64 {
        self.gate.last_issued()
    }

    /// Sequence number of the newest request answered so far.
    #[must_use]
    pub fn last_seen(&self) -> u64 {
        self.gate.last_seen()
    }

    /// Whether the newest request has been answered, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.gate.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::CollectingPresenter;

    const WAIT: Duration = Duration::from_secs(5);

    /// Echoes the investment amount back as the net redemption amount after
    /// sleeping `redemption_amount` milliseconds.
    struct EchoService;

    impl CalculationService for EchoService {
        fn calculate(
            &self,
            request: &CalculationRequest,
        ) -> Result<CalculationResult, ServiceError> {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            thread::sleep(Duration::from_millis(request.redemption_amount as u64));
            Ok(CalculationResult {
                net_redemption_amount: request.investment_amount,
                exit_load_period: request.exit_load_period,
                ..CalculationResult::default()
            })
        }
    }

    struct FailingService;

    impl CalculationService for FailingService {
        fn calculate(&self, _: &CalculationRequest) -> Result<CalculationResult, ServiceError> {
            Err(ServiceError::Status { status: 503 })
        }
    }

    fn values(investment: f64, delay_ms: f64) -> FieldValues {
        FieldValues {
            investment_amount: investment,
            redemption_amount: delay_ms,
            ..FieldValues::defaults()
        }
    }

    #[test]
    fn single_request_is_applied() {
        let dispatcher = RecalcDispatcher::new(Arc::new(EchoService));
        let presenter = CollectingPresenter::new();

        let seq = dispatcher.submit(&values(5000.0, 0.0)).unwrap();
        assert_eq!(seq, 1);
        let envelope = dispatcher.recv_timeout(WAIT).unwrap();
        assert_eq!(dispatcher.deliver(envelope, &presenter), Delivery::Applied);

        let latest = presenter.latest().unwrap();
        assert!((latest.net_redemption_amount - 5000.0).abs() < f64::EPSILON);
        assert!((latest.exit_load_period - 365.0).abs() < f64::EPSILON);
        assert!(dispatcher.is_settled());
    }

    #[test]
    fn negative_values_are_never_sent() {
        let dispatcher = RecalcDispatcher::new(Arc::new(EchoService));
        let err = dispatcher.submit(&values(-1.0, 0.0)).unwrap_err();
        assert!(matches!(err, RequestError::NegativeInput { .. }));
        assert_eq!(dispatcher.last_issued(), 0);
        assert!(dispatcher
            .recv_timeout(Duration::from_millis(100))
            .is_err());
    }

    #[test]
    fn late_response_for_older_request_is_discarded() {
        let dispatcher = RecalcDispatcher::new(Arc::new(EchoService));
        let presenter = CollectingPresenter::new();

        let slow = dispatcher.submit(&values(1000.0, 400.0)).unwrap();
        let fast = dispatcher.submit(&values(2000.0, 0.0)).unwrap();
        assert!(slow < fast);

        let first = dispatcher.recv_timeout(WAIT).unwrap();
        assert_eq!(first.seq, fast);
        assert_eq!(dispatcher.deliver(first, &presenter), Delivery::Applied);

        let second = dispatcher.recv_timeout(WAIT).unwrap();
        assert_eq!(second.seq, slow);
        assert_eq!(dispatcher.deliver(second, &presenter), Delivery::Stale);

        let shown = presenter.results();
        assert_eq!(shown.len(), 1);
        assert!((shown[0].net_redemption_amount - 2000.0).abs() < f64::EPSILON);
        assert_eq!(dispatcher.last_seen(), fast);
    }

    #[test]
    fn failure_is_presented_and_keeps_last_result() {
        let dispatcher = RecalcDispatcher::new(Arc::new(FailingService));
        let presenter = CollectingPresenter::new();

        dispatcher.submit(&FieldValues::defaults()).unwrap();
        let envelope = dispatcher.recv_timeout(WAIT).unwrap();
        assert_eq!(dispatcher.deliver(envelope, &presenter), Delivery::Failed);
        assert!(presenter.results().is_empty());
        assert_eq!(presenter.errors(), vec![ServiceError::Status { status: 503 }]);
        assert_eq!(dispatcher.last_seen(), 1);
        assert!(dispatcher.is_settled());
    }

    /// Fails at once for investments below 1000, otherwise behaves like
    /// [`EchoService`].
    struct FlakyService;

    impl CalculationService for FlakyService {
        fn calculate(
            &self,
            request: &CalculationRequest,
        ) -> Result<CalculationResult, ServiceError> {
            if request.investment_amount < 1000.0 {
                return Err(ServiceError::Status { status: 503 });
            }
            EchoService.calculate(request)
        }
    }

    #[test]
    fn late_success_after_newer_failure_is_discarded() {
        let dispatcher = RecalcDispatcher::new(Arc::new(FlakyService));
        let presenter = CollectingPresenter::new();

        let slow = dispatcher.submit(&values(1000.0, 300.0)).unwrap();
        let failing = dispatcher.submit(&values(500.0, 0.0)).unwrap();

        let first = dispatcher.recv_timeout(WAIT).unwrap();
        assert_eq!(first.seq, failing);
        assert_eq!(dispatcher.deliver(first, &presenter), Delivery::Failed);
        assert!(dispatcher.is_settled());

        let second = dispatcher.recv_timeout(WAIT).unwrap();
        assert_eq!(second.seq, slow);
        assert_eq!(dispatcher.deliver(second, &presenter), Delivery::Stale);

        assert!(presenter.results().is_empty());
        assert_eq!(presenter.errors().len(), 1);
        assert_eq!(dispatcher.last_seen(), failing);
    }

    #[test]
    fn late_failure_after_newer_success_is_not_presented() {
        let dispatcher = RecalcDispatcher::new(Arc::new(EchoService));
        let presenter = CollectingPresenter::new();
        let older = dispatcher.submit(&values(1000.0, 0.0)).unwrap();
        let newer = dispatcher.submit(&values(2000.0, 0.0)).unwrap();

        let success = Envelope {
            seq: newer,
            outcome: Ok(CalculationResult::default()),
        };
        let failure = Envelope {
            seq: older,
            outcome: Err(ServiceError::Status { status: 503 }),
        };
        assert_eq!(dispatcher.deliver(success, &presenter), Delivery::Applied);
        assert_eq!(dispatcher.deliver(failure, &presenter), Delivery::Stale);
        assert!(presenter.errors().is_empty());
        assert_eq!(presenter.results().len(), 1);
    }

    #[test]
    fn drain_handles_everything_that_arrived() {
        let dispatcher = RecalcDispatcher::new(Arc::new(EchoService));
        let presenter = CollectingPresenter::new();
        assert_eq!(dispatcher.drain(&presenter), 0);

        for investment in [1000.0, 2000.0, 3000.0] {
            dispatcher.submit(&values(investment, 0.0)).unwrap();
        }
        let mut handled = 0;
        let deadline = std::time::Instant::now() + WAIT;
        while handled < 3 && std::time::Instant::now() < deadline {
            handled += dispatcher.drain(&presenter);
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(handled, 3);
        assert!(dispatcher.is_settled());
        assert!(!presenter.results().is_empty());
    }
}
