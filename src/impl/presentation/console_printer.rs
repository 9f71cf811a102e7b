use crate::entities::{LoadReport, LoadSource, MonthlyTotal, SalesListing, SalesSummary};

const NO_SALES: &str = "No sales recorded yet.";

pub(crate) struct ConsolePrinter;

impl ConsolePrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn menu(&self) -> String {
        [
            "",
            "--- Sales Tracker ---",
            "1) Add a sale",
            "2) List sales",
            "3) Show summary",
            "4) Show monthly total",
            "5) Exit",
            "",
        ]
        .join("\n")
    }

    pub(crate) fn load_notice(&self, report: &LoadReport, location: &str) -> String {
        match report.source {
            LoadSource::Missing => "No previous sales file found. Starting fresh.".to_string(),
            LoadSource::Unreadable => {
                format!("Could not read {}. Starting fresh.", location)
            }
            LoadSource::File if report.loaded == 0 => {
                "Sales file is empty. Starting fresh.".to_string()
            }
            LoadSource::File => format!("Loaded {} sale(s) from {}.", report.loaded, location),
        }
    }

    pub(crate) fn save_notice(&self, saved: usize, location: &str) -> String {
        format!("Saved {} sale(s) to {}.", saved, location)
    }

    pub(crate) fn listing(&self, listing: &SalesListing) -> String {
        if listing.is_empty() {
            return NO_SALES.to_string();
        }
        let mut output = String::new();
        for row in &listing.rows {
            output.push_str(&format!(
                "{}. {} | {} | {:.2} | {}\n",
                row.index, row.date, row.customer, row.amount, row.description
            ));
        }
        output.push_str(&format!("\nTotal sales: ${:.2}", listing.total));
        output
    }

    pub(crate) fn summary(&self, summary: Option<&SalesSummary>) -> String {
        let Some(summary) = summary else {
            return NO_SALES.to_string();
        };
        [
            format!("Number of sales: {}", summary.count),
            format!("Total sales: ${:.2}", summary.total),
            format!("Average sale: ${:.2}", summary.average),
            format!(
                "Biggest sale: ${:.2} ({} - {})",
                summary.biggest.amount, summary.biggest.date, summary.biggest.customer
            ),
        ]
        .join("\n")
    }

    /// `period` is the `YYYY-MM` label used when nothing matched.
    pub(crate) fn monthly_total(&self, result: Option<&MonthlyTotal>, period: &str) -> String {
        let Some(result) = result else {
            return format!("No sales found for {}.", period);
        };
        [
            format!("\nSales for {}-{}:", result.year, result.month),
            format!("Number of sales: {}", result.count),
            format!("Total sales: ${:.2}", result.total),
            format!("Average sale: ${:.2}", result.average),
        ]
        .join("\n")
    }
}
