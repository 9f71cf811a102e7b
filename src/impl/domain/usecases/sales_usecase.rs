use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        models::iso_date_model::ISODateModel,
        repositories::sales_repository_impl::SalesRepositoryImpl,
    },
    domain::{
        logic::{sales_aggregator::SalesAggregator, sales_store::SalesStore},
        repositories::sales_repository::SalesRepository,
    },
    entities::{
        LoadReport, Month, MonthlyTotal, Sale, SaleAdded, SalesListing, SalesSummary,
    },
};

#[async_trait]
pub trait SalesUsecase: Send + Sync {
    async fn load(&mut self) -> LoadReport;

    /// Appends `sale` and immediately rewrites the backing store. `Err` only
    /// when the sale itself is rejected; a failed save is reported in the
    /// returned `SaleAdded`.
    async fn add_sale(&mut self, sale: Sale) -> Result<SaleAdded, ServerError>;

    fn list_all(&self) -> SalesListing;

    fn summarize(&self) -> Option<SalesSummary>;

    fn monthly_total(&self, year: &str, month: Month) -> Option<MonthlyTotal>;

    fn count(&self) -> usize;

    fn location(&self) -> String;
}

pub(crate) struct SalesUsecaseImpl<
    R = SalesRepositoryImpl, // Default.
> where
    R: SalesRepository,
{
    store: SalesStore<R>,
}

#[async_trait]
impl<R> SalesUsecase for SalesUsecaseImpl<R>
where
    R: SalesRepository,
{
    async fn load(&mut self) -> LoadReport {
        self.store.load().await
    }

    async fn add_sale(&mut self, sale: Sale) -> Result<SaleAdded, ServerError> {
        if ISODateModel::parse(&sale.date).is_none() {
            log::warn!("sale date {:?} is not in YYYY-MM-DD form", sale.date);
        }
        self.store.append(sale)?;
        let saved = self.store.save().await.map(|_| ());
        if let Err(e) = &saved {
            log::error!("failed to save sales to {}: {}", self.store.location(), e);
        }
        Ok(SaleAdded {
            count: self.store.sales().len(),
            saved,
        })
    }

    fn list_all(&self) -> SalesListing {
        SalesAggregator::new(self.store.sales()).list_all()
    }

    fn summarize(&self) -> Option<SalesSummary> {
        SalesAggregator::new(self.store.sales()).summarize()
    }

    fn monthly_total(&self, year: &str, month: Month) -> Option<MonthlyTotal> {
        SalesAggregator::new(self.store.sales()).monthly_total(year, month)
    }

    fn count(&self) -> usize {
        self.store.sales().len()
    }

    fn location(&self) -> String {
        self.store.location()
    }
}

impl SalesUsecaseImpl {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        SalesUsecaseImpl {
            store: SalesStore::new(SalesRepositoryImpl::new(path)),
        }
    }
}
