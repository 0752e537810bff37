//! # exitload-orchestration
//!
//! Calculation service client, presenter interfaces, and recalculation
//! dispatch with freshest-result sequencing.

pub mod dispatcher;
pub mod error;
pub mod http;
pub mod interfaces;

pub use dispatcher::{Delivery, Envelope, RecalcDispatcher};
pub use error::ServiceError;
pub use http::{HttpCalculationService, HttpServiceConfig};
pub use interfaces::{CalculationService, CollectingPresenter, ResultsPresenter};
