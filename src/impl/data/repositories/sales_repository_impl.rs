use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::sales_csv_datasource::{SalesCsvDatasource, SalesCsvDatasourceImpl},
    domain::repositories::sales_repository::{SalesRepository, StoredSales},
    entities::{LoadSource, Sale},
    errors::{ReadError, WriteError},
};

pub(crate) struct SalesRepositoryImpl<DS = SalesCsvDatasourceImpl>
where
    DS: SalesCsvDatasource,
{
    path: PathBuf,
    datasource: DS,
}

#[async_trait]
impl<DS> SalesRepository for SalesRepositoryImpl<DS>
where
    DS: SalesCsvDatasource,
{
    async fn load(&self) -> Result<StoredSales, ServerError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no sales file at {}", self.path.display());
                return Ok(StoredSales {
                    source: LoadSource::Missing,
                    sales: Vec::new(),
                    skipped: 0,
                });
            }
            Err(e) => return Err(ReadError::with_debug(&e)),
        };
        let parsed = self.datasource.from_bytes(&bytes)?;
        Ok(StoredSales {
            source: LoadSource::File,
            sales: parsed.sales,
            skipped: parsed.skipped,
        })
    }

    async fn save(&self, sales: &[Sale]) -> Result<(), ServerError> {
        let bytes = self.datasource.to_bytes(sales)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| WriteError::with_debug(&e))?;
        log::debug!("wrote {} sale(s) to {}", sales.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl SalesRepositoryImpl<SalesCsvDatasourceImpl> {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        SalesRepositoryImpl {
            path: path.as_ref().to_path_buf(),
            datasource: SalesCsvDatasourceImpl::new(),
        }
    }
}
