//! Ledger domain models: recurrence rules and daily forecast entries.

pub mod entry;
pub mod rule;

pub use entry::LedgerEntry;
pub use rule::{Direction, Frequency, Rule};
