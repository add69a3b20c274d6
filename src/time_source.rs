//! Injectable wall-clock sources.
//!
//! The model works on naive local wall time: no timezone conversion happens
//! anywhere in the crate.

use chrono::{Duration, Local, NaiveDateTime};
use std::cell::Cell;

/// Anything that can report the current wall-clock instant.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Test clock advanced by hand.
#[derive(Debug)]
pub struct ManualClock {
    current: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    pub fn set(&self, to: NaiveDateTime) {
        self.current.set(to);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}
