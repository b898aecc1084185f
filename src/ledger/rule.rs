use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a rule adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

/// How often a rule fires, expressed as a fixed calendar offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiyearly,
    Yearly,
}

impl Frequency {
    /// Parses one of the seven frequency keywords.
    pub fn parse(value: &str) -> Option<Frequency> {
        match value.trim() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "biweekly" => Some(Frequency::Biweekly),
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "semiyearly" => Some(Frequency::Semiyearly),
            "yearly" => Some(Frequency::Yearly),
            _ => None,
        }
    }

    /// Returns the next fire date after `from`.
    ///
    /// Month-based steps keep the day-of-month, clamped to the target
    /// month's last day (so a Jan 31 step lands on Feb 28, and the clamped
    /// day carries into later steps). A result that cannot be represented
    /// clamps to `NaiveDate::MAX` instead of wrapping.
    pub fn advance(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => add_days(from, 1),
            Frequency::Weekly => add_days(from, 7),
            Frequency::Biweekly => add_days(from, 14),
            Frequency::Monthly => shift_month(from, 1),
            Frequency::Quarterly => shift_month(from, 3),
            Frequency::Semiyearly => shift_month(from, 6),
            Frequency::Yearly => shift_year(from, 1),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Semiyearly => "Semiyearly",
            Frequency::Yearly => "Yearly",
        }
    }
}

/// One recurring income or expense definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub direction: Direction,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub anchor_date: NaiveDate,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        amount: Decimal,
        frequency: Frequency,
        anchor_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            amount,
            frequency,
            anchor_date,
        }
    }

    /// The rule's amount with the sign its direction applies to the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Income => self.amount,
            Direction::Expense => -self.amount,
        }
    }

    /// True iff the rule fires on `date`: the date equals the anchor or is
    /// reachable from it by successive `advance` steps.
    pub fn fires_on(&self, date: NaiveDate) -> bool {
        if date < self.anchor_date {
            return false;
        }
        let mut cursor = self.anchor_date;
        while cursor < date {
            let next = self.frequency.advance(cursor);
            if next <= cursor {
                return false;
            }
            cursor = next;
        }
        cursor == date
    }
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MAX)
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(NaiveDate::MAX)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(NaiveDate::MAX)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_next) => (first_next - Duration::days(1)).day(),
        None => 28,
    }
}
