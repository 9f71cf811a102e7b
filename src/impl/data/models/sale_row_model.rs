use crate::entities::Sale;

pub(crate) const HEADER: [&str; 4] = ["date", "customer", "description", "amount"];

/// Row shape written to the backing file. Field order is column order.
#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct SaleRowModel<'a> {
    pub date: &'a str,
    pub customer: &'a str,
    pub description: &'a str,
    pub amount: f64,
}

impl<'a> From<&'a Sale> for SaleRowModel<'a> {
    fn from(sale: &'a Sale) -> Self {
        SaleRowModel {
            date: &sale.date,
            customer: &sale.customer,
            description: &sale.description,
            amount: sale.amount,
        }
    }
}

/// Column positions resolved from a header row, so that files with
/// reordered or extra columns still load.
#[derive(Debug, Default)]
pub(crate) struct ColumnLayout {
    pub date: Option<usize>,
    pub customer: Option<usize>,
    pub description: Option<usize>,
    pub amount: Option<usize>,
}

impl ColumnLayout {
    pub(crate) fn from_headers(headers: &csv::ByteRecord) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h).trim() == name)
        };
        ColumnLayout {
            date: position(HEADER[0]),
            customer: position(HEADER[1]),
            description: position(HEADER[2]),
            amount: position(HEADER[3]),
        }
    }
}
