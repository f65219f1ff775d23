use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{Chronicled, Displayable, Identifiable, NamedEntity, RecordId},
    history::{History, LedgerAction, LedgerEntry},
    month::MonthKey,
};

/// Editable fields supplied when hiring or updating a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherDetails {
    pub name: String,
    pub subject: String,
    pub experience: u8,
    pub contact: String,
    pub monthly_salary: f64,
}

impl TeacherDetails {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        experience: u8,
        contact: impl Into<String>,
        monthly_salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            experience,
            contact: contact.into(),
            monthly_salary,
        }
    }
}

/// Salary totals over a teacher's history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SalarySummary {
    pub monthly_salary: f64,
    pub total_paid: f64,
    pub payment_count: usize,
    pub average_payment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherRecord {
    pub id: RecordId,
    pub name: String,
    pub subject: String,
    pub experience: u8,
    pub contact: String,
    pub monthly_salary: f64,
    history: History,
}

impl TeacherRecord {
    pub fn hire(id: RecordId, details: TeacherDetails, hired_on: NaiveDate) -> Self {
        let mut record = Self {
            id,
            name: String::new(),
            subject: String::new(),
            experience: 0,
            contact: String::new(),
            monthly_salary: 0.0,
            history: History::starting_with(LedgerEntry::hired(hired_on)),
        };
        record.assign(details);
        record
    }

    /// First salary entry recorded for `month`, if any.
    pub fn salary_payment_for(&self, month: MonthKey) -> Option<&LedgerEntry> {
        self.history
            .of_action(LedgerAction::SalaryPaid)
            .find(|entry| entry.month == Some(month))
    }

    pub fn salary_summary(&self) -> SalarySummary {
        let (total_paid, payment_count) = self
            .history
            .of_action(LedgerAction::SalaryPaid)
            .fold((0.0, 0usize), |(sum, count), entry| (sum + entry.amount, count + 1));
        let average_payment = if payment_count == 0 {
            0.0
        } else {
            total_paid / payment_count as f64
        };
        SalarySummary {
            monthly_salary: self.monthly_salary,
            total_paid,
            payment_count,
            average_payment,
        }
    }

    pub(crate) fn apply_update(&mut self, details: TeacherDetails, updated_on: NaiveDate) {
        self.assign(details);
        self.history.append(LedgerEntry::info_updated(updated_on));
    }

    pub(crate) fn record_salary(&mut self, amount: f64, month: MonthKey, paid_on: NaiveDate) {
        self.history.append(LedgerEntry::salary_paid(paid_on, amount, month));
    }

    fn assign(&mut self, details: TeacherDetails) {
        self.name = details.name.trim().to_string();
        self.subject = details.subject.trim().to_string();
        self.experience = details.experience;
        self.contact = details.contact.trim().to_string();
        self.monthly_salary = details.monthly_salary;
    }
}

impl Identifiable for TeacherRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for TeacherRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for TeacherRecord {
    fn display_label(&self) -> String {
        format!("#{} {} ({})", self.id, self.name, self.subject)
    }
}

impl Chronicled for TeacherRecord {
    fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn summary_averages_salary_entries_only() {
        let mut teacher = TeacherRecord::hire(
            1,
            TeacherDetails::new("Kofi Boateng", "Physics", 4, "0241000000", 3000.0),
            date(5, 1),
        );
        assert_eq!(teacher.salary_summary().payment_count, 0);
        assert_eq!(teacher.salary_summary().average_payment, 0.0);

        teacher.record_salary(3000.0, MonthKey::new(2025, 6).unwrap(), date(6, 30));
        teacher.record_salary(3200.0, MonthKey::new(2025, 7).unwrap(), date(7, 31));
        teacher.apply_update(
            TeacherDetails::new("Kofi Boateng", "Physics", 5, "0241000000", 3200.0),
            date(8, 1),
        );

        let summary = teacher.salary_summary();
        assert_eq!(summary.payment_count, 2);
        assert_eq!(summary.total_paid, 6200.0);
        assert_eq!(summary.average_payment, 3100.0);
        assert_eq!(summary.monthly_salary, 3200.0);
    }

    #[test]
    fn salary_lookup_matches_canonical_month() {
        let mut teacher = TeacherRecord::hire(
            2,
            TeacherDetails::new("Efua Asante", "English", 7, "0241999999", 4000.0),
            date(1, 10),
        );
        let august = MonthKey::new(2025, 8).unwrap();
        teacher.record_salary(4000.0, august, date(9, 1));

        let entry = teacher.salary_payment_for(august).expect("august salary");
        assert_eq!(entry.date, date(9, 1));
        assert!(teacher
            .salary_payment_for(MonthKey::new(2024, 8).unwrap())
            .is_none());
    }
}
