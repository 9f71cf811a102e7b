use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let amount = raw
            .parse::<f64>()
            .map_err(|e| InvalidAmount::with_debug(raw, &e))?;
        // Rust happily parses "inf" and "NaN", which are never valid sales.
        if !amount.is_finite() {
            return Err(InvalidAmount::new(raw));
        }
        Ok(AmountModel(amount))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
