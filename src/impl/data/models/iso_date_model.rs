use chrono::NaiveDate;

/// Dates are kept as free text on a sale. This only tells whether the text
/// also reads as an ISO date, so the operator can be warned about typos.
#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl ISODateModel {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .ok()
            .map(ISODateModel)
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
