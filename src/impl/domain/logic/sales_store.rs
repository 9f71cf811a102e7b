use fractic_server_error::ServerError;

use crate::{
    domain::repositories::sales_repository::SalesRepository,
    entities::{LoadReport, LoadSource, Sale},
};

/// Authoritative in-memory list of sales, mirrored to a repository.
///
/// Nothing is persisted implicitly: callers `save()` after each `append()`.
pub(crate) struct SalesStore<R: SalesRepository> {
    sales: Vec<Sale>,
    repository: R,
}

impl<R: SalesRepository> SalesStore<R> {
    pub(crate) fn new(repository: R) -> Self {
        Self {
            sales: Vec::new(),
            repository,
        }
    }

    /// Replaces the in-memory list with the stored sales.
    ///
    /// A store that can't be read at all leaves the list empty; the failure
    /// is logged and reported through `LoadSource::Unreadable`.
    pub(crate) async fn load(&mut self) -> LoadReport {
        match self.repository.load().await {
            Ok(stored) => {
                if stored.skipped > 0 {
                    log::debug!("dropped {} malformed row(s) while loading", stored.skipped);
                }
                self.sales = stored.sales;
                LoadReport {
                    source: stored.source,
                    loaded: self.sales.len(),
                    skipped: stored.skipped,
                }
            }
            Err(e) => {
                log::warn!("could not load {}: {}", self.repository.location(), e);
                self.sales.clear();
                LoadReport {
                    source: LoadSource::Unreadable,
                    loaded: 0,
                    skipped: 0,
                }
            }
        }
    }

    /// Rewrites the whole store. Returns the number of sales written.
    pub(crate) async fn save(&self) -> Result<usize, ServerError> {
        self.repository.save(&self.sales).await?;
        Ok(self.sales.len())
    }

    pub(crate) fn append(&mut self, sale: Sale) -> Result<(), ServerError> {
        sale.validate()?;
        self.sales.push(sale);
        Ok(())
    }

    pub(crate) fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub(crate) fn location(&self) -> String {
        self.repository.location()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        data::repositories::sales_repository_impl::SalesRepositoryImpl,
        domain::repositories::sales_repository::StoredSales, errors::ReadError,
    };

    /// Keeps saved sales in memory, and can be told to fail loads.
    #[derive(Default)]
    struct MemoryRepository {
        saved: Mutex<Vec<Vec<Sale>>>,
        fail_load: bool,
    }

    #[async_trait]
    impl SalesRepository for MemoryRepository {
        async fn load(&self) -> Result<StoredSales, ServerError> {
            if self.fail_load {
                return Err(ReadError::new());
            }
            Ok(StoredSales {
                source: LoadSource::File,
                sales: vec![Sale::new("2025-01-01", "A", "x", 1.0)],
                skipped: 2,
            })
        }

        async fn save(&self, sales: &[Sale]) -> Result<(), ServerError> {
            self.saved.lock().unwrap().push(sales.to_vec());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    #[tokio::test]
    async fn load_reports_loaded_and_skipped_counts() {
        let mut store = SalesStore::new(MemoryRepository::default());
        let report = store.load().await;
        assert_eq!(
            report,
            LoadReport {
                source: LoadSource::File,
                loaded: 1,
                skipped: 2,
            }
        );
        assert_eq!(store.sales().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_starts_empty() {
        let mut store = SalesStore::new(MemoryRepository {
            fail_load: true,
            ..Default::default()
        });
        let report = store.load().await;
        assert_eq!(report.source, LoadSource::Unreadable);
        assert!(store.sales().is_empty());
    }

    #[tokio::test]
    async fn append_does_not_persist_until_saved() {
        let mut store = SalesStore::new(MemoryRepository::default());
        store
            .append(Sale::new("2025-03-01", "Acme", "Lipstick", 45.5))
            .unwrap();
        assert!(store.repository.saved.lock().unwrap().is_empty());

        assert_eq!(store.save().await.unwrap(), 1);
        let saved = store.repository.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], store.sales);
    }

    #[test]
    fn append_rejects_non_finite_amounts() {
        let mut store = SalesStore::new(MemoryRepository::default());
        assert!(store.append(Sale::new("2025-03-01", "A", "x", f64::NAN)).is_err());
        assert!(store.sales().is_empty());
    }

    #[tokio::test]
    async fn round_trips_through_the_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let sales = vec![
            Sale::new("2025-01-15", "Jane Doe", "Lipstick set", 45.5),
            Sale::new("2025-01-15", "Jane Doe", "Lipstick set", 45.5),
            Sale::new("2025-02-01", "Doe, John", "Gloss\nand liner", 0.1),
            Sale::new("", "", "", -12.75),
        ];

        let mut store = SalesStore::new(SalesRepositoryImpl::new(&path));
        for sale in sales.iter().cloned() {
            store.append(sale).unwrap();
        }
        store.save().await.unwrap();

        let mut reloaded = SalesStore::new(SalesRepositoryImpl::new(&path));
        let report = reloaded.load().await;
        assert_eq!(report.loaded, sales.len());
        assert_eq!(reloaded.sales(), sales.as_slice());
    }

    #[tokio::test]
    async fn non_utf8_rows_survive_the_next_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let mut bytes = b"date,customer,description,amount\n".to_vec();
        bytes.extend_from_slice(b"2025-01-15,Jos\xe9,Lipstick set,45.50\n");
        bytes.extend_from_slice(b"2025-01-16,Kim,Gloss,10\n");
        std::fs::write(&path, bytes).unwrap();

        let mut store = SalesStore::new(SalesRepositoryImpl::new(&path));
        let report = store.load().await;
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 0);

        store
            .append(Sale::new("2025-01-17", "Lee", "Liner", 5.0))
            .unwrap();
        assert_eq!(store.save().await.unwrap(), 3);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("2025-01-15,Jos\u{FFFD},Lipstick set,45.5"));
    }
}
