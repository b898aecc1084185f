use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ForecastError;
use crate::ledger::{Direction, Frequency, Rule};

const REQUIRED_INPUT_FIELDS: [&str; 5] =
    ["name", "transaction_type", "amount", "frequency", "next_date"];

/// Reads and validates the rules CSV. The header must contain exactly the
/// required fields (in any order); each row becomes one [`Rule`]. Headers
/// and fields are trimmed before matching.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>, ForecastError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    validate_header(reader.headers()?)?;

    let mut rules = Vec::new();
    for record in reader.deserialize() {
        let record: RuleRecord = record?;
        let rule = record.into_rule()?;
        tracing::debug!(
            name = %rule.name,
            frequency = rule.frequency.label(),
            anchor = %rule.anchor_date,
            "loaded rule"
        );
        rules.push(rule);
    }
    Ok(rules)
}

fn validate_header(headers: &csv::StringRecord) -> Result<(), ForecastError> {
    let fields: HashSet<&str> = headers.iter().collect();
    let required: HashSet<&str> = REQUIRED_INPUT_FIELDS.into_iter().collect();
    if fields != required {
        return Err(ForecastError::InvalidHeader);
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct RuleRecord {
    name: String,
    transaction_type: String,
    amount: String,
    frequency: String,
    next_date: String,
}

impl RuleRecord {
    fn into_rule(self) -> Result<Rule, ForecastError> {
        let direction = match self.transaction_type.trim() {
            "income" => Direction::Income,
            "expense" => Direction::Expense,
            _ => return Err(ForecastError::InvalidDirection { name: self.name }),
        };
        let amount = self
            .amount
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|value| !value.is_sign_negative())
            .ok_or_else(|| ForecastError::InvalidAmount {
                name: self.name.clone(),
                value: self.amount.clone(),
            })?;
        let frequency =
            Frequency::parse(&self.frequency).ok_or_else(|| ForecastError::InvalidFrequency {
                name: self.name.clone(),
                value: self.frequency.clone(),
            })?;
        let anchor_date = NaiveDate::parse_from_str(self.next_date.trim(), "%Y-%m-%d")
            .map_err(|_| ForecastError::InvalidDate {
                name: self.name.clone(),
            })?;

        Ok(Rule::new(
            self.name,
            direction,
            amount.round_dp(2),
            frequency,
            anchor_date,
        ))
    }
}
