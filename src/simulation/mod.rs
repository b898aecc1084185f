//! Day-by-day balance projection over a fixed horizon.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::ledger::{LedgerEntry, Rule};

/// Everything one simulation run needs. Rule order is preserved so same-day
/// ties resolve deterministically.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub start_balance: Decimal,
    pub start_date: NaiveDate,
    pub horizon_days: u32,
    pub rules: Vec<Rule>,
}

/// A rule's next upcoming fire date during one run. `None` once advancing
/// can no longer move the date forward.
struct RuleCursor<'a> {
    rule: &'a Rule,
    next_fire: Option<NaiveDate>,
}

impl<'a> RuleCursor<'a> {
    /// Rolls the anchor forward to the first occurrence on or after `start`.
    fn new(rule: &'a Rule, start: NaiveDate) -> Self {
        let mut next_fire = Some(rule.anchor_date);
        while let Some(date) = next_fire {
            if date >= start {
                break;
            }
            next_fire = step(rule, date);
        }
        RuleCursor { rule, next_fire }
    }

    /// Returns the signed amount if the rule fires on `date`, advancing the
    /// cursor past it. At most one fire per day per rule.
    fn fire_if_due(&mut self, date: NaiveDate) -> Option<Decimal> {
        if self.next_fire != Some(date) {
            return None;
        }
        self.next_fire = step(self.rule, date);
        Some(self.rule.signed_amount())
    }
}

fn step(rule: &Rule, from: NaiveDate) -> Option<NaiveDate> {
    let next = rule.frequency.advance(from);
    (next > from).then_some(next)
}

/// Projects the balance forward one calendar day at a time, producing exactly
/// `horizon_days` entries. Pure function of the config: cursors are rebuilt
/// from each rule's anchor on every call. Days past the last representable
/// date clamp to `NaiveDate::MAX` rather than overflowing.
pub fn simulate(config: &SimulationConfig) -> Vec<LedgerEntry> {
    let mut cursors: Vec<RuleCursor> = config
        .rules
        .iter()
        .map(|rule| RuleCursor::new(rule, config.start_date))
        .collect();

    let mut balance = config.start_balance;
    let mut entries = Vec::with_capacity(config.horizon_days as usize);

    for offset in 0..config.horizon_days {
        let date = config
            .start_date
            .checked_add_signed(Duration::days(i64::from(offset)))
            .unwrap_or(NaiveDate::MAX);
        let mut delta = Decimal::ZERO;
        for cursor in cursors.iter_mut() {
            if let Some(amount) = cursor.fire_if_due(date) {
                delta += amount;
            }
        }
        balance += delta;
        entries.push(LedgerEntry {
            date,
            delta,
            balance,
        });
    }

    entries
}
