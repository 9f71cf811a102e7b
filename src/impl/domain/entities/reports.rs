use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;

use crate::errors::InvalidMonth;

use super::sale::Sale;

// Loading.
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// No backing file yet.
    Missing,
    /// Backing file was read.
    File,
    /// Backing file exists but could not be read or decoded.
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    pub loaded: usize,
    /// Rows dropped because their amount was missing or not a number.
    pub skipped: usize,
}

// Adding.
// ---

/// Result of adding a sale that passed validation. The sale is in memory
/// whether or not `saved` succeeded.
#[derive(Debug)]
pub struct SaleAdded {
    /// Sales held after the addition.
    pub count: usize,
    pub saved: Result<(), ServerError>,
}

// Reports.
// ---

#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    /// 1-based.
    pub index: usize,
    pub date: String,
    pub customer: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesListing {
    pub rows: Vec<ListingRow>,
    pub total: f64,
}

impl SalesListing {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub biggest: Sale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub year: String,
    pub month: Month,
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

// Month.
// ---

/// Calendar month number, always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Month {
    type Error = ServerError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(InvalidMonth::new(&value.to_string()))
        }
    }
}

impl FromStr for Month {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = raw
            .parse::<i64>()
            .map_err(|e| InvalidMonth::with_debug(raw, &e))?;
        Month::try_from(value)
    }
}

/// Two-digit form, as used in dates (ex. "03").
impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
