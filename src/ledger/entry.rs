use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One simulated day's net change and the resulting balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub delta: Decimal,
    pub balance: Decimal,
}
