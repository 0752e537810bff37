//! Outbound calculation request.

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_YEAR;
use crate::field::FieldId;
use crate::sync::FieldValues;

/// Reasons a request is not built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// A field value was negative; the request is suppressed.
    #[error("{field} is negative ({value})")]
    NegativeInput { field: FieldId, value: f64 },
}

/// The six parameters sent to the calculation endpoint.
///
/// `exit_load_period` is in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub investment_amount: f64,
    pub exit_load_rate: f64,
    pub redemption_amount: f64,
    pub exit_load_period: f64,
    pub purchase_nav: f64,
    pub current_nav: f64,
}

impl CalculationRequest {
    /// Build a request from field values, scaling the period from years to
    /// days. Fails if any value is negative.
    pub fn from_values(values: &FieldValues) -> Result<Self, RequestError> {
        for id in FieldId::ALL {
            let value = values.get(id);
            if value < 0.0 {
                return Err(RequestError::NegativeInput { field: id, value });
            }
        }

        Ok(Self {
            investment_amount: values.investment_amount,
            exit_load_rate: values.exit_load_rate,
            redemption_amount: values.redemption_amount,
            exit_load_period: values.exit_load_period_years * DAYS_PER_YEAR,
            purchase_nav: values.purchase_nav,
            current_nav: values.current_nav,
        })
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scale_period_to_days() {
        let req = CalculationRequest::from_values(&FieldValues::defaults()).unwrap();
        assert!((req.exit_load_period - 365.0).abs() < f64::EPSILON);
        assert!((req.investment_amount - 100_000.0).abs() < f64::EPSILON);
        assert!((req.current_nav - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let values = FieldValues {
            exit_load_rate: -1.0,
            ..FieldValues::defaults()
        };
        let err = CalculationRequest::from_values(&values).unwrap_err();
        assert_eq!(
            err,
            RequestError::NegativeInput {
                field: FieldId::ExitLoadRate,
                value: -1.0
            }
        );
    }

    #[test]
    fn every_field_is_checked() {
        for id in FieldId::ALL {
            let values = FieldValues::from_fn(|f| if f == id { -0.5 } else { 1.0 });
            assert!(CalculationRequest::from_values(&values).is_err(), "{id}");
        }
    }

    #[test]
    fn zero_is_allowed() {
        let values = FieldValues::from_fn(|_| 0.0);
        assert!(CalculationRequest::from_values(&values).is_ok());
    }

    #[test]
    fn json_has_exactly_six_members() {
        let req = CalculationRequest::from_values(&FieldValues::defaults()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for id in FieldId::ALL {
            assert!(obj.contains_key(id.wire_name()), "missing {id}");
        }
        assert_eq!(obj["exit_load_period"], serde_json::json!(365.0));
    }
}
