//! # exitload-core
//!
//! Host-independent logic for the exit load calculator: bound fields and
//! their text/slider synchronization, rupee formatting, the request and
//! result records exchanged with the calculation endpoint, freshest-result
//! sequencing, chart and table models, and the navigation dropdown.

pub mod breakdown;
pub mod comparison;
pub mod constants;
pub mod currency;
pub mod events;
pub mod field;
pub mod input;
pub mod nav;
pub mod request;
pub mod result;
pub mod sequence;
pub mod surface;
pub mod sync;
pub mod view;

// Re-exports
pub use constants::exit_codes;
pub use currency::{format_currency, format_currency_opt};
pub use events::{EventBus, Propagation};
pub use field::{BoundField, FieldId};
pub use input::parse_input;
pub use nav::{ClickTarget, MenuState, NavDropdown, NavEvent, NavKey, NavLink};
pub use request::{CalculationRequest, RequestError};
pub use result::CalculationResult;
pub use sequence::SequenceGate;
pub use surface::{FieldSurface, FieldWidgets};
pub use sync::{FieldEvent, FieldSet, FieldValues, InputSliderSync};
pub use view::{ExitLoadStatus, ResultsView};
