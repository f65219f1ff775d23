use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{common::ParseError, month::MonthKey};

/// Kind of event recorded in a student or teacher history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LedgerAction {
    Enrolled,
    Hired,
    FeePayment,
    SalaryPaid,
    InfoUpdated,
}

impl LedgerAction {
    pub fn label(&self) -> &'static str {
        match self {
            LedgerAction::Enrolled => "Enrolled",
            LedgerAction::Hired => "Hired",
            LedgerAction::FeePayment => "Fee Payment",
            LedgerAction::SalaryPaid => "Salary Paid",
            LedgerAction::InfoUpdated => "Information Updated",
        }
    }

    pub fn is_monetary(&self) -> bool {
        matches!(self, LedgerAction::FeePayment | LedgerAction::SalaryPaid)
    }
}

impl fmt::Display for LedgerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a fee payment was settled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    BankTransfer,
    MobileMoney,
    Cheque,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::MobileMoney => "Mobile Money",
            PaymentMethod::Cheque => "Cheque",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "banktransfer" | "bank" => Ok(PaymentMethod::BankTransfer),
            "mobilemoney" | "momo" => Ok(PaymentMethod::MobileMoney),
            "cheque" | "check" => Ok(PaymentMethod::Cheque),
            _ => Err(ParseError::new("payment method", input)),
        }
    }
}

/// One event in an entity's history. Entries are immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub action: LedgerAction,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthKey>,
}

impl LedgerEntry {
    fn marker(date: NaiveDate, action: LedgerAction) -> Self {
        Self {
            date,
            action,
            amount: 0.0,
            method: None,
            month: None,
        }
    }

    pub fn enrolled(date: NaiveDate) -> Self {
        Self::marker(date, LedgerAction::Enrolled)
    }

    pub fn hired(date: NaiveDate) -> Self {
        Self::marker(date, LedgerAction::Hired)
    }

    pub fn info_updated(date: NaiveDate) -> Self {
        Self::marker(date, LedgerAction::InfoUpdated)
    }

    pub fn fee_payment(date: NaiveDate, amount: f64, method: PaymentMethod) -> Self {
        Self {
            amount,
            method: Some(method),
            ..Self::marker(date, LedgerAction::FeePayment)
        }
    }

    pub fn salary_paid(date: NaiveDate, amount: f64, month: MonthKey) -> Self {
        Self {
            amount,
            month: Some(month),
            ..Self::marker(date, LedgerAction::SalaryPaid)
        }
    }

    /// Month label for salary entries, e.g. `August 2025`.
    pub fn month_label(&self) -> Option<String> {
        self.month.map(|month| month.label())
    }
}

/// Append-only, insertion-ordered list of [`LedgerEntry`] values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct History {
    entries: Vec<LedgerEntry>,
}

impl History {
    pub fn starting_with(entry: LedgerEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn of_action(&self, action: LedgerAction) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(move |entry| entry.action == action)
    }

    /// Entries sorted by date, most recent first. Same-day entries keep their
    /// insertion order.
    pub fn newest_first(&self) -> Vec<LedgerEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
