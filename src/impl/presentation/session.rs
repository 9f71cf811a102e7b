use std::str::FromStr as _;

use fractic_server_error::ServerError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _, AsyncWrite, AsyncWriteExt as _, Lines};

use crate::{
    entities::{Month, Sale},
    errors::ConsoleError,
    presentation::console_printer::ConsolePrinter,
    util::SalesTracker,
};

enum Choice {
    Add,
    List,
    Summary,
    MonthlyTotal,
    Exit,
}

impl Choice {
    /// Exact match: " 1" is not a choice.
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::List),
            "3" => Some(Choice::Summary),
            "4" => Some(Choice::MonthlyTotal),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Interactive menu loop over a line-based input and a text output.
///
/// End of input is treated like choosing Exit.
pub struct Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracker: SalesTracker,
    input: Lines<R>,
    output: W,
    printer: ConsolePrinter,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(tracker: SalesTracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input: input.lines(),
            output,
            printer: ConsolePrinter::new(),
        }
    }

    pub fn tracker(&self) -> &SalesTracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> SalesTracker {
        self.tracker
    }

    /// Loads the ledger, then serves menu choices until Exit.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        let report = self.tracker.load().await;
        let notice = self
            .printer
            .load_notice(&report, &self.tracker.location());
        self.say(&notice).await?;

        loop {
            let menu = self.printer.menu();
            self.write(&menu).await?;
            let Some(choice) = self.prompt("Choose an option (1-5): ").await? else {
                break;
            };
            let keep_going = match Choice::parse(&choice) {
                Some(Choice::Add) => self.add_sale().await?,
                Some(Choice::List) => self.list_sales().await?,
                Some(Choice::Summary) => self.show_summary().await?,
                Some(Choice::MonthlyTotal) => self.show_monthly_total().await?,
                Some(Choice::Exit) => false,
                None => {
                    self.say("Please enter 1, 2, 3, 4 or 5.").await?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        self.say("Goodbye!").await
    }

    // Each handler returns false once input has run out.

    async fn add_sale(&mut self) -> Result<bool, ServerError> {
        self.say("\n=== Add a new sale ===").await?;
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ").await? else {
            return Ok(false);
        };
        let Some(customer) = self.prompt("Customer name: ").await? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Products / notes: ").await? else {
            return Ok(false);
        };
        let Some(raw_amount) = self
            .prompt("Total amount (just numbers, e.g. 45.50): ")
            .await?
        else {
            return Ok(false);
        };

        let amount = match Sale::parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(e) => {
                log::debug!("rejected amount {:?}: {}", raw_amount, e);
                self.say("Invalid amount. Sale not saved.").await?;
                return Ok(true);
            }
        };

        let sale = Sale::new(date, customer, description, amount);
        let added = match self.tracker.add_sale(sale).await {
            Ok(added) => added,
            Err(e) => {
                log::debug!("rejected sale: {}", e);
                self.say("Invalid amount. Sale not saved.").await?;
                return Ok(true);
            }
        };
        self.say("Sale added!").await?;
        match added.saved {
            Ok(()) => {
                let notice = self
                    .printer
                    .save_notice(added.count, &self.tracker.location());
                self.say(&notice).await?;
            }
            Err(e) => {
                self.say(&format!("Could not save sales: {}", e)).await?;
            }
        }
        Ok(true)
    }

    async fn list_sales(&mut self) -> Result<bool, ServerError> {
        self.say("\n=== Sales so far ===").await?;
        let text = self.printer.listing(&self.tracker.list_all());
        self.say(&text).await?;
        Ok(true)
    }

    async fn show_summary(&mut self) -> Result<bool, ServerError> {
        self.say("\n=== Sales Summary ===").await?;
        let text = self.printer.summary(self.tracker.summarize().as_ref());
        self.say(&text).await?;
        Ok(true)
    }

    async fn show_monthly_total(&mut self) -> Result<bool, ServerError> {
        self.say("\n=== Monthly Total ===").await?;
        if self.tracker.is_empty() {
            self.say("No sales recorded yet.").await?;
            return Ok(true);
        }

        let Some(year) = self.prompt("Year (e.g. 2025): ").await? else {
            return Ok(false);
        };
        let Some(raw_month) = self.prompt("Month (1-12): ").await? else {
            return Ok(false);
        };
        let year = year.trim();

        let month = match Month::from_str(&raw_month) {
            Ok(month) => month,
            Err(_) => {
                self.say("Invalid month. Please enter a number from 1-12.")
                    .await?;
                return Ok(true);
            }
        };

        let result = self.tracker.monthly_total(year, month);
        let period = format!("{}-{}", year, month);
        let text = self.printer.monthly_total(result.as_ref(), &period);
        self.say(&text).await?;
        Ok(true)
    }

    // I/O helpers.
    // ---

    /// Writes `label` and reads one line. `None` at end of input.
    async fn prompt(&mut self, label: &str) -> Result<Option<String>, ServerError> {
        self.write(label).await?;
        self.input
            .next_line()
            .await
            .map_err(|e| ConsoleError::with_debug(&e))
    }

    async fn say(&mut self, text: &str) -> Result<(), ServerError> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> Result<(), ServerError> {
        self.output
            .write_all(text.as_bytes())
            .await
            .map_err(|e| ConsoleError::with_debug(&e))?;
        self.output
            .flush()
            .await
            .map_err(|e| ConsoleError::with_debug(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_script(tracker: SalesTracker, script: &str) -> (String, SalesTracker) {
        let mut output = Vec::new();
        let mut session = Session::new(tracker, script.as_bytes(), &mut output);
        session.run().await.unwrap();
        let tracker = session.into_tracker();
        (String::from_utf8(output).unwrap(), tracker)
    }

    #[tokio::test]
    async fn invalid_choice_reprompts_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let (output, tracker) = run_script(SalesTracker::new(&path), "9\nabc\n5\n").await;
        assert_eq!(output.matches("Please enter 1, 2, 3, 4 or 5.").count(), 2);
        assert!(output.contains("No previous sales file found. Starting fresh."));
        assert!(output.ends_with("Goodbye!\n"));
        assert!(tracker.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn end_of_input_exits_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let (output, _) = run_script(SalesTracker::new(dir.path().join("s.csv")), "1\n2025-01-01\n").await;
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn invalid_amount_discards_the_sale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let (output, tracker) = run_script(
            SalesTracker::new(&path),
            "1\n2025-03-01\nAcme\nLipstick\nlots\n5\n",
        )
        .await;
        assert!(output.contains("Invalid amount. Sale not saved."));
        assert!(tracker.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn monthly_total_on_empty_ledger_skips_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let (output, _) = run_script(SalesTracker::new(dir.path().join("s.csv")), "4\n5\n").await;
        assert!(output.contains("No sales recorded yet."));
        assert!(!output.contains("Year (e.g. 2025): "));
    }

    #[tokio::test]
    async fn add_then_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let script = "1\n2025-03-01\nAcme\nLipstick\n45.5\n\
                      1\n2025-03-02\nBeta\nGloss\n10.25\n\
                      2\n3\n\
                      4\n2025\n3\n\
                      4\n2025\n4\n\
                      4\n2025\n13\n\
                      5\n";
        let (output, tracker) = run_script(SalesTracker::new(&path), script).await;

        assert_eq!(output.matches("Sale added!").count(), 2);
        assert!(output.contains("Saved 2 sale(s) to"));
        assert!(output.contains("1. 2025-03-01 | Acme | 45.50 | Lipstick"));
        assert!(output.contains("2. 2025-03-02 | Beta | 10.25 | Gloss"));
        assert!(output.contains("Total sales: $55.75"));
        assert!(output.contains("Average sale: $27.88"));
        assert!(output.contains("Biggest sale: $45.50 (2025-03-01 - Acme)"));
        assert!(output.contains("Sales for 2025-03:"));
        assert!(output.contains("No sales found for 2025-04."));
        assert!(output.contains("Invalid month. Please enter a number from 1-12."));
        assert_eq!(tracker.len(), 2);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "date,customer,description,amount\n\
             2025-03-01,Acme,Lipstick,45.5\n\
             2025-03-02,Beta,Gloss,10.25\n"
        );
    }

    #[tokio::test]
    async fn padded_choice_is_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let (output, _) = run_script(SalesTracker::new(dir.path().join("s.csv")), " 1\n2 \n5\n").await;
        assert_eq!(output.matches("Please enter 1, 2, 3, 4 or 5.").count(), 2);
        assert!(!output.contains("=== Add a new sale ==="));
        assert!(!output.contains("=== Sales so far ==="));
    }

    #[tokio::test]
    async fn failed_save_still_confirms_the_sale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("sales.csv");
        let (output, tracker) = run_script(
            SalesTracker::new(&path),
            "1\n2025-03-01\nAcme\nLipstick\n45.5\n5\n",
        )
        .await;
        let added = output.find("Sale added!").unwrap();
        let failed = output.find("Could not save sales:").unwrap();
        assert!(added < failed);
        assert!(!output.contains("Saved 1 sale(s)"));
        assert_eq!(tracker.len(), 1);
    }
}
