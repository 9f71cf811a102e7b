use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{LoadSource, Sale};

/// Sales read back from durable storage.
#[derive(Debug)]
pub struct StoredSales {
    pub source: LoadSource,
    pub sales: Vec<Sale>,
    pub skipped: usize,
}

#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Reads every stored sale. A missing store is not an error.
    async fn load(&self) -> Result<StoredSales, ServerError>;

    /// Replaces the stored sales with `sales`.
    async fn save(&self, sales: &[Sale]) -> Result<(), ServerError>;

    /// Human-readable location of the store, for operator messages.
    fn location(&self) -> String;
}
