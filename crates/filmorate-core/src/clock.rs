//! # Clock
//!
//! Source of "today" for date rules such as "birthday is not in the future".

use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Supplies the current calendar date.
///
/// Must be `Send + Sync` so a catalog can sit behind a shared lock.
pub trait Clock: Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
