//! Read-only views handed to the presentation layer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::RecordId,
    history::{LedgerAction, LedgerEntry},
    salary::SalaryObligation,
    student::FeeStatus,
    teacher::SalarySummary,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentHistory {
    pub student_id: RecordId,
    pub name: String,
    /// Most recent first.
    pub entries: Vec<LedgerEntry>,
    pub total_fee: f64,
    pub paid_amount: f64,
    pub balance: f64,
    pub fee_status: FeeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherHistory {
    pub teacher_id: RecordId,
    pub name: String,
    pub subject: String,
    /// Most recent first.
    pub entries: Vec<LedgerEntry>,
    pub summary: SalarySummary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DashboardTotals {
    pub student_count: usize,
    pub teacher_count: usize,
    pub total_fees_collected: f64,
    pub outstanding_fees: f64,
    pub total_salaries_paid_this_month: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityOwner {
    Student,
    Teacher,
}

/// A history entry tagged with the entity it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub owner: ActivityOwner,
    pub owner_id: RecordId,
    pub owner_name: String,
    pub date: NaiveDate,
    pub action: LedgerAction,
    pub amount: f64,
}

impl fmt::Display for ActivityItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.owner_name, self.action)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeRow {
    pub student_id: RecordId,
    pub name: String,
    pub total_fee: f64,
    pub paid_amount: f64,
    pub balance: f64,
    pub status: FeeStatus,
    pub last_payment: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeReport {
    pub rows: Vec<FeeRow>,
    pub total_fees: f64,
    pub total_paid: f64,
    pub total_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryReport {
    pub obligations: Vec<SalaryObligation>,
    pub total_paid: f64,
    pub total_pending: f64,
    pub paid_count: usize,
    pub pending_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffRow {
    pub teacher_id: RecordId,
    pub name: String,
    pub subject: String,
    pub experience: u8,
    pub contact: String,
    pub monthly_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffReport {
    pub rows: Vec<StaffRow>,
    pub total_monthly_payroll: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsOverview {
    pub student_count: usize,
    pub teacher_count: usize,
    pub total_fees_expected: f64,
    pub total_fees_collected: f64,
    pub outstanding_fees: f64,
    /// Percentage of expected fees collected; 0 when nothing is expected.
    pub collection_rate: f64,
    pub monthly_payroll: f64,
}

/// Outcome of paying every pending obligation at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PayrollBatch {
    pub amount_paid: f64,
    pub count: usize,
    pub payment_date: NaiveDate,
}
