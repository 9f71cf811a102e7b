use std::str::FromStr as _;

use fractic_server_error::{CriticalError, ServerError};

use crate::{
    data::models::{
        amount_model::AmountModel,
        sale_row_model::{ColumnLayout, SaleRowModel, HEADER},
    },
    entities::Sale,
    errors::{InvalidCsv, WriteError},
};

/// Sales decoded from a backing file, plus the number of rows that had to be
/// dropped along the way.
#[derive(Debug, Default)]
pub(crate) struct ParsedSales {
    pub sales: Vec<Sale>,
    pub skipped: usize,
}

/// Decodes one cell. Bytes that aren't UTF-8 (ex. a Latin-1 name) become
/// U+FFFD instead of costing the whole row.
fn field(r: &csv::ByteRecord, column: Option<usize>) -> Option<String> {
    column
        .and_then(|c| r.get(c))
        .map(|b| String::from_utf8_lossy(b).into_owned())
}

pub(crate) trait SalesCsvDatasource: Send + Sync {
    fn from_bytes(&self, bytes: &[u8]) -> Result<ParsedSales, ServerError>;

    fn to_bytes(&self, sales: &[Sale]) -> Result<Vec<u8>, ServerError>;
}

pub(crate) struct SalesCsvDatasourceImpl;

impl SalesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SalesCsvDatasource for SalesCsvDatasourceImpl {
    fn from_bytes(&self, bytes: &[u8]) -> Result<ParsedSales, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes);
        let layout = ColumnLayout::from_headers(
            reader.byte_headers().map_err(|e| InvalidCsv::with_debug(&e))?,
        );

        let mut parsed = ParsedSales::default();
        for (i, r) in reader.byte_records().enumerate() {
            let r = match r {
                Ok(r) => r,
                Err(e) => {
                    log::debug!("skipping unreadable row {}: {}", i + 1, e);
                    parsed.skipped += 1;
                    continue;
                }
            };

            // Extract from CSV record.
            let raw_date = field(&r, layout.date).unwrap_or_default();
            let raw_customer = field(&r, layout.customer).unwrap_or_default();
            let raw_description = field(&r, layout.description).unwrap_or_default();
            let raw_amount = match field(&r, layout.amount) {
                Some(a) => a,
                None => {
                    log::debug!("skipping row {}: no amount", i + 1);
                    parsed.skipped += 1;
                    continue;
                }
            };

            // Parse.
            let amount: f64 = match AmountModel::from_str(&raw_amount) {
                Ok(a) => a.into(),
                Err(_) => {
                    log::debug!("skipping row {}: bad amount {:?}", i + 1, raw_amount);
                    parsed.skipped += 1;
                    continue;
                }
            };

            // Build.
            parsed
                .sales
                .push(Sale::new(raw_date, raw_customer, raw_description, amount));
        }
        Ok(parsed)
    }

    fn to_bytes(&self, sales: &[Sale]) -> Result<Vec<u8>, ServerError> {
        // Header is written by hand so that an empty ledger still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| WriteError::with_debug(&e))?;
        for sale in sales {
            writer
                .serialize(SaleRowModel::from(sale))
                .map_err(|e| WriteError::with_debug(&e))?;
        }
        writer.into_inner().map_err(|e| {
            CriticalError::with_debug("failed to flush in-memory CSV writer", &e.error().to_string())
        })
    }
}
