use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{Chronicled, Displayable, Identifiable, NamedEntity, RecordId},
    history::{History, LedgerAction, LedgerEntry, PaymentMethod},
};

/// Fee standing of a student, always derived from the paid and total amounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeeStatus {
    Paid,
    Partial,
    Unpaid,
}

impl FeeStatus {
    /// `Paid` once `paid >= total`, `Partial` for any positive shortfall,
    /// otherwise `Unpaid`.
    pub fn derive(paid_amount: f64, total_fee: f64) -> Self {
        if paid_amount >= total_fee {
            FeeStatus::Paid
        } else if paid_amount > 0.0 {
            FeeStatus::Partial
        } else {
            FeeStatus::Unpaid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "Paid",
            FeeStatus::Partial => "Partial",
            FeeStatus::Unpaid => "Unpaid",
        }
    }
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable fields supplied when enrolling or updating a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentDetails {
    pub name: String,
    pub grade: u8,
    pub age: u8,
    pub parent_contact: String,
    pub total_fee: f64,
}

impl StudentDetails {
    pub fn new(
        name: impl Into<String>,
        grade: u8,
        age: u8,
        parent_contact: impl Into<String>,
        total_fee: f64,
    ) -> Self {
        Self {
            name: name.into(),
            grade,
            age,
            parent_contact: parent_contact.into(),
            total_fee,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub id: RecordId,
    pub name: String,
    pub grade: u8,
    pub age: u8,
    pub parent_contact: String,
    pub total_fee: f64,
    paid_amount: f64,
    history: History,
}

impl StudentRecord {
    /// Creates an unpaid student whose history opens with an enrolment entry.
    pub fn enroll(id: RecordId, details: StudentDetails, enrolled_on: NaiveDate) -> Self {
        let mut record = Self {
            id,
            name: String::new(),
            grade: 0,
            age: 0,
            parent_contact: String::new(),
            total_fee: 0.0,
            paid_amount: 0.0,
            history: History::starting_with(LedgerEntry::enrolled(enrolled_on)),
        };
        record.assign(details);
        record
    }

    pub fn paid_amount(&self) -> f64 {
        self.paid_amount
    }

    pub fn fee_status(&self) -> FeeStatus {
        FeeStatus::derive(self.paid_amount, self.total_fee)
    }

    /// Amount still owed; never negative.
    pub fn balance(&self) -> f64 {
        (self.total_fee - self.paid_amount).max(0.0)
    }

    /// Date of the most recent fee payment, if any.
    pub fn last_payment(&self) -> Option<NaiveDate> {
        self.history
            .of_action(LedgerAction::FeePayment)
            .map(|entry| entry.date)
            .max()
    }

    pub(crate) fn apply_update(&mut self, details: StudentDetails, updated_on: NaiveDate) {
        self.assign(details);
        self.history.append(LedgerEntry::info_updated(updated_on));
    }

    /// Caller validates `amount` against the balance first. The running
    /// total never exceeds the fee.
    pub(crate) fn apply_payment(&mut self, amount: f64, method: PaymentMethod, paid_on: NaiveDate) {
        self.paid_amount = (self.paid_amount + amount).min(self.total_fee);
        self.history.append(LedgerEntry::fee_payment(paid_on, amount, method));
    }

    fn assign(&mut self, details: StudentDetails) {
        self.name = details.name.trim().to_string();
        self.grade = details.grade;
        self.age = details.age;
        self.parent_contact = details.parent_contact.trim().to_string();
        self.total_fee = details.total_fee;
    }
}

impl Identifiable for StudentRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for StudentRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for StudentRecord {
    fn display_label(&self) -> String {
        format!("#{} {} (Grade {})", self.id, self.name, self.grade)
    }
}

impl Chronicled for StudentRecord {
    fn history(&self) -> &History {
        &self.history
    }
}
