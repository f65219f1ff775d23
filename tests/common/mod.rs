#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use school_admin::{
    config::Config,
    core::{Clock, FixedClock, SchoolManager},
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Empty school with the clock pinned to 20 September 2025.
pub fn manager() -> SchoolManager {
    manager_on(date(2025, 9, 20))
}

pub fn manager_on(today: NaiveDate) -> SchoolManager {
    SchoolManager::new(Config::default(), Box::new(FixedClock::new(today)))
}

/// Clock whose day can be moved while a manager holds it.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<NaiveDate>>);

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(Arc::new(Mutex::new(today)))
    }

    pub fn set(&self, today: NaiveDate) {
        *self.0.lock().expect("clock lock") = today;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.today().and_time(NaiveTime::MIN).and_utc()
    }

    fn today(&self) -> NaiveDate {
        *self.0.lock().expect("clock lock")
    }
}
