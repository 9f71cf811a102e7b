use std::path::Path;

use fractic_server_error::ServerError;

use crate::{
    domain::usecases::sales_usecase::{SalesUsecase as _, SalesUsecaseImpl},
    entities::{
        LoadReport, Month, MonthlyTotal, Sale, SaleAdded, SalesListing, SalesSummary,
    },
};

/// Sales ledger backed by a CSV file.
///
/// Holds every sale in memory for its whole lifetime. Call `load()` once
/// before anything else; every accepted `add_sale()` rewrites the file.
pub struct SalesTracker {
    usecase: SalesUsecaseImpl,
}

impl SalesTracker {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            usecase: SalesUsecaseImpl::new(path),
        }
    }

    pub async fn load(&mut self) -> LoadReport {
        self.usecase.load().await
    }

    pub async fn add_sale(&mut self, sale: Sale) -> Result<SaleAdded, ServerError> {
        self.usecase.add_sale(sale).await
    }

    pub fn list_all(&self) -> SalesListing {
        self.usecase.list_all()
    }

    pub fn summarize(&self) -> Option<SalesSummary> {
        self.usecase.summarize()
    }

    pub fn monthly_total(&self, year: &str, month: Month) -> Option<MonthlyTotal> {
        self.usecase.monthly_total(year, month)
    }

    pub fn is_empty(&self) -> bool {
        self.usecase.count() == 0
    }

    pub fn len(&self) -> usize {
        self.usecase.count()
    }

    /// Path of the backing file, for display.
    pub fn location(&self) -> String {
        self.usecase.location()
    }
}
