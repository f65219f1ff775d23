use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{ParseError, RecordId},
    month::MonthKey,
    teacher::TeacherRecord,
};

/// Identifies one teacher's salary for one month. Rendered as `<teacher>-<YYYY-MM>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObligationKey {
    pub teacher_id: RecordId,
    pub month: MonthKey,
}

impl ObligationKey {
    pub fn new(teacher_id: RecordId, month: MonthKey) -> Self {
        Self { teacher_id, month }
    }
}

impl fmt::Display for ObligationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.teacher_id, self.month)
    }
}

impl FromStr for ObligationKey {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::new("obligation key", input);
        let (teacher, month) = input.trim().split_once('-').ok_or_else(invalid)?;
        let teacher_id = teacher.parse::<RecordId>().map_err(|_| invalid())?;
        let month = month.parse::<MonthKey>().map_err(|_| invalid())?;
        Ok(Self { teacher_id, month })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SalaryStatus {
    Paid,
    Pending,
}

impl SalaryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SalaryStatus::Paid => "Paid",
            SalaryStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expected salary for one teacher and month, projected from the teacher's
/// rate and history. Never a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryObligation {
    pub key: ObligationKey,
    pub teacher_name: String,
    pub subject: String,
    pub amount: f64,
    pub status: SalaryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

impl SalaryObligation {
    pub fn teacher_id(&self) -> RecordId {
        self.key.teacher_id
    }

    pub fn month(&self) -> MonthKey {
        self.key.month
    }

    pub fn month_label(&self) -> String {
        self.key.month.label()
    }

    pub fn is_pending(&self) -> bool {
        self.status == SalaryStatus::Pending
    }
}

/// Trailing run of months for which obligations are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryWindow {
    pub current: MonthKey,
    pub months: u32,
}

impl SalaryWindow {
    pub const DEFAULT_MONTHS: u32 = 6;

    pub fn new(current: MonthKey, months: u32) -> Self {
        Self { current, months }
    }

    pub fn ending(current: MonthKey) -> Self {
        Self::new(current, Self::DEFAULT_MONTHS)
    }

    /// Months in the window, oldest first.
    pub fn month_keys(&self) -> Vec<MonthKey> {
        self.current.trailing(self.months)
    }

    pub fn contains(&self, month: MonthKey) -> bool {
        month <= self.current && month > self.current.shift(-(self.months as i32))
    }
}

/// Projects one obligation per teacher and month in `window`, in teacher
/// order then month order. Pure: the same teachers and histories always
/// yield the same obligations.
pub fn project_obligations(
    teachers: &[TeacherRecord],
    window: SalaryWindow,
) -> Vec<SalaryObligation> {
    let months = window.month_keys();
    teachers
        .iter()
        .flat_map(|teacher| {
            months.iter().map(move |&month| {
                let payment = teacher.salary_payment_for(month);
                SalaryObligation {
                    key: ObligationKey::new(teacher.id, month),
                    teacher_name: teacher.name.clone(),
                    subject: teacher.subject.clone(),
                    amount: teacher.monthly_salary,
                    status: if payment.is_some() {
                        SalaryStatus::Paid
                    } else {
                        SalaryStatus::Pending
                    },
                    payment_date: payment.map(|entry| entry.date),
                }
            })
        })
        .collect()
}
