#![doc(test(attr(deny(warnings))))]

//! Forecast Core projects a bank account balance forward over a fixed number
//! of days, given a set of recurring income and expense rules.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod simulation;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Forecast Core tracing initialized.");
    });
}
