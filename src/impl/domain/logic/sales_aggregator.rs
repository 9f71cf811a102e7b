use crate::entities::{ListingRow, Month, MonthlyTotal, Sale, SalesListing, SalesSummary};

/// Read-only reports over a snapshot of sales.
pub(crate) struct SalesAggregator<'a> {
    sales: &'a [Sale],
}

impl<'a> SalesAggregator<'a> {
    pub(crate) fn new(sales: &'a [Sale]) -> Self {
        Self { sales }
    }

    pub(crate) fn list_all(&self) -> SalesListing {
        let rows = self
            .sales
            .iter()
            .enumerate()
            .map(|(i, sale)| ListingRow {
                index: i + 1,
                date: sale.date.clone(),
                customer: sale.customer.clone(),
                amount: sale.amount,
                description: sale.description.clone(),
            })
            .collect();
        SalesListing {
            rows,
            total: self.total(),
        }
    }

    /// `None` when there are no sales.
    pub(crate) fn summarize(&self) -> Option<SalesSummary> {
        let (first, rest) = self.sales.split_first()?;
        // Only a strictly greater amount replaces the candidate, so ties keep
        // the earliest sale.
        let biggest = rest
            .iter()
            .fold(first, |max, sale| if sale.amount > max.amount { sale } else { max });
        let count = self.sales.len();
        let total = self.total();
        Some(SalesSummary {
            count,
            total,
            average: total / count as f64,
            biggest: biggest.clone(),
        })
    }

    /// Totals the sales whose date starts with `"{year}-{month:02}-"`.
    ///
    /// `year` is used verbatim. `None` when nothing matches.
    pub(crate) fn monthly_total(&self, year: &str, month: Month) -> Option<MonthlyTotal> {
        let prefix = format!("{}-{}-", year, month);
        let (count, total) = self
            .sales
            .iter()
            .filter(|sale| sale.date.starts_with(&prefix))
            .fold((0usize, 0.0f64), |(count, total), sale| {
                (count + 1, total + sale.amount)
            });
        if count == 0 {
            return None;
        }
        Some(MonthlyTotal {
            year: year.to_string(),
            month,
            count,
            total,
            average: total / count as f64,
        })
    }

    fn total(&self) -> f64 {
        self.sales.iter().map(|sale| sale.amount).sum()
    }
}
