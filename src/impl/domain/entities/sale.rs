use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{data::models::amount_model::AmountModel, errors::InvalidAmount};

/// A single recorded sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// Expected as `YYYY-MM-DD`, but stored verbatim.
    pub date: String,
    pub customer: String,
    pub description: String,
    pub amount: f64,
}

impl Sale {
    pub fn new(
        date: impl Into<String>,
        customer: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            customer: customer.into(),
            description: description.into(),
            amount,
        }
    }

    /// Parses operator-entered amount text (ex. "45.50").
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite
    /// number is rejected.
    pub fn parse_amount(raw: &str) -> Result<f64, ServerError> {
        AmountModel::from_str(raw).map(Into::into)
    }

    pub(crate) fn validate(&self) -> Result<(), ServerError> {
        if self.amount.is_finite() {
            Ok(())
        } else {
            Err(InvalidAmount::new(&self.amount.to_string()))
        }
    }
}
