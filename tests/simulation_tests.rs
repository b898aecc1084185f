use chrono::NaiveDate;
use forecast_core::ledger::{Direction, Frequency, Rule};
use forecast_core::simulation::{simulate, SimulationConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn paycheck_and_internet() -> Vec<Rule> {
    vec![
        Rule::new(
            "Paycheck",
            Direction::Income,
            dec!(1000),
            Frequency::Biweekly,
            date(2025, 5, 2),
        ),
        Rule::new(
            "Internet",
            Direction::Expense,
            dec!(50),
            Frequency::Monthly,
            date(2025, 5, 1),
        ),
    ]
}

#[test]
fn five_day_forecast_matches_expected_ledger() {
    let config = SimulationConfig {
        start_balance: dec!(2000.00),
        start_date: date(2025, 5, 1),
        horizon_days: 5,
        rules: paycheck_and_internet(),
    };

    let entries = simulate(&config);
    assert_eq!(entries.len(), 5);

    assert_eq!(entries[0].date, date(2025, 5, 1));
    assert_eq!(entries[0].delta, dec!(-50));
    assert_eq!(entries[0].balance, dec!(1950.00));

    assert_eq!(entries[1].date, date(2025, 5, 2));
    assert_eq!(entries[1].delta, dec!(1000));
    assert_eq!(entries[1].balance, dec!(2950.00));

    for entry in &entries[2..] {
        assert_eq!(entry.delta, Decimal::ZERO);
        assert_eq!(entry.balance, dec!(2950.00));
    }
}

#[test]
fn simulate_is_idempotent() {
    let config = SimulationConfig {
        start_balance: dec!(2000.00),
        start_date: date(2025, 5, 1),
        horizon_days: 60,
        rules: paycheck_and_internet(),
    };

    assert_eq!(simulate(&config), simulate(&config));
}

#[test]
fn balance_continuity_holds() {
    let config = SimulationConfig {
        start_balance: dec!(123.45),
        start_date: date(2025, 1, 15),
        horizon_days: 400,
        rules: vec![
            Rule::new(
                "Rent",
                Direction::Expense,
                dec!(1200),
                Frequency::Monthly,
                date(2025, 1, 31),
            ),
            Rule::new(
                "Salary",
                Direction::Income,
                dec!(2500),
                Frequency::Biweekly,
                date(2025, 1, 17),
            ),
            Rule::new(
                "Coffee",
                Direction::Expense,
                dec!(4.50),
                Frequency::Daily,
                date(2025, 1, 1),
            ),
        ],
    };

    let entries = simulate(&config);
    assert_eq!(entries[0].balance, config.start_balance + entries[0].delta);
    for pair in entries.windows(2) {
        assert_eq!(pair[1].balance, pair[0].balance + pair[1].delta);
    }
}

#[test]
fn zero_horizon_produces_no_entries() {
    let config = SimulationConfig {
        start_balance: dec!(500),
        start_date: date(2025, 5, 1),
        horizon_days: 0,
        rules: paycheck_and_internet(),
    };

    assert!(simulate(&config).is_empty());
}

#[test]
fn anchor_beyond_window_never_fires() {
    let config = SimulationConfig {
        start_balance: dec!(100),
        start_date: date(2025, 5, 1),
        horizon_days: 30,
        rules: vec![Rule::new(
            "Bonus",
            Direction::Income,
            dec!(5000),
            Frequency::Yearly,
            date(2026, 1, 1),
        )],
    };

    for entry in simulate(&config) {
        assert_eq!(entry.delta, Decimal::ZERO);
        assert_eq!(entry.balance, dec!(100));
    }
}

#[test]
fn anchor_before_start_rolls_forward() {
    // Weekly rule anchored a day before the window: it fires on the
    // occurrences reachable from the anchor, not on the start date itself.
    let config = SimulationConfig {
        start_balance: Decimal::ZERO,
        start_date: date(2025, 5, 1),
        horizon_days: 14,
        rules: vec![Rule::new(
            "Allowance",
            Direction::Income,
            dec!(20),
            Frequency::Weekly,
            date(2025, 4, 30),
        )],
    };

    let entries = simulate(&config);
    let fired: Vec<NaiveDate> = entries
        .iter()
        .filter(|e| e.delta != Decimal::ZERO)
        .map(|e| e.date)
        .collect();
    assert_eq!(fired, vec![date(2025, 5, 7), date(2025, 5, 14)]);
}

#[test]
fn multiple_rules_firing_same_day_sum_into_delta() {
    let anchor = date(2025, 5, 1);
    let config = SimulationConfig {
        start_balance: Decimal::ZERO,
        start_date: anchor,
        horizon_days: 1,
        rules: vec![
            Rule::new("Salary", Direction::Income, dec!(100), Frequency::Monthly, anchor),
            Rule::new("Side gig", Direction::Income, dec!(25), Frequency::Weekly, anchor),
            Rule::new("Gym", Direction::Expense, dec!(30), Frequency::Monthly, anchor),
        ],
    };

    let entries = simulate(&config);
    assert_eq!(entries[0].delta, dec!(95));
    assert_eq!(entries[0].balance, dec!(95));
}

#[test]
fn daily_rule_fires_every_day() {
    let config = SimulationConfig {
        start_balance: dec!(10.00),
        start_date: date(2025, 5, 1),
        horizon_days: 7,
        rules: vec![Rule::new(
            "Coffee",
            Direction::Expense,
            dec!(1.50),
            Frequency::Daily,
            date(2025, 5, 1),
        )],
    };

    let entries = simulate(&config);
    assert!(entries.iter().all(|e| e.delta == dec!(-1.50)));
    assert_eq!(entries[6].balance, dec!(-0.50));
}

#[test]
fn horizon_past_max_date_clamps_without_panicking() {
    // A window that runs off the end of the representable calendar still
    // yields horizon_days entries; days past the limit clamp to MAX and a
    // rule anchored there fires exactly once before its cursor retires.
    let config = SimulationConfig {
        start_balance: Decimal::ZERO,
        start_date: NaiveDate::MAX - chrono::Duration::days(2),
        horizon_days: 5,
        rules: vec![Rule::new(
            "Payout",
            Direction::Income,
            dec!(10),
            Frequency::Daily,
            NaiveDate::MAX,
        )],
    };

    let entries = simulate(&config);
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| e.date <= NaiveDate::MAX));
    let fired = entries
        .iter()
        .filter(|e| e.delta != Decimal::ZERO)
        .count();
    assert_eq!(fired, 1);
    assert_eq!(entries.last().unwrap().balance, dec!(10));
}

#[test]
fn monthly_rule_keeps_clamped_day_through_short_months() {
    let config = SimulationConfig {
        start_balance: Decimal::ZERO,
        start_date: date(2025, 1, 31),
        horizon_days: 90,
        rules: vec![Rule::new(
            "Rent",
            Direction::Expense,
            dec!(1000),
            Frequency::Monthly,
            date(2025, 1, 31),
        )],
    };

    let entries = simulate(&config);
    let fired: Vec<NaiveDate> = entries
        .iter()
        .filter(|e| e.delta != Decimal::ZERO)
        .map(|e| e.date)
        .collect();
    assert_eq!(
        fired,
        vec![
            date(2025, 1, 31),
            date(2025, 2, 28),
            date(2025, 3, 28),
            date(2025, 4, 28),
        ]
    );
}
