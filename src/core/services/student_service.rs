//! Business logic helpers for enrolling students and collecting their fees.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::services::{cents, require_amount, require_text, ServiceError, ServiceResult};
use crate::domain::{
    report::StudentHistory, Chronicled, PaymentMethod, RecordId, School, StudentDetails,
    StudentRecord,
};

/// Validated commands and queries over the school's students.
pub struct StudentService;

impl StudentService {
    /// Enrols a new student with nothing paid and returns the stored record.
    pub fn add(
        school: &mut School,
        details: StudentDetails,
        today: NaiveDate,
    ) -> ServiceResult<StudentRecord> {
        Self::validate(&details)?;
        let id = school.next_student_id();
        let record = StudentRecord::enroll(id, details, today);
        school.add_student(record.clone());
        info!(student_id = id, "student enrolled");
        Ok(record)
    }

    /// Overwrites the editable fields and appends an update entry.
    pub fn update(
        school: &mut School,
        id: RecordId,
        details: StudentDetails,
        today: NaiveDate,
    ) -> ServiceResult<StudentRecord> {
        Self::validate(&details)?;
        let student = school.student_mut(id).ok_or_else(|| Self::not_found(id))?;
        if cents(details.total_fee) < cents(student.paid_amount()) {
            warn!(student_id = id, "total fee below amount already paid");
            return Err(ServiceError::Validation(format!(
                "total fee {} is lower than the {} already paid",
                details.total_fee,
                student.paid_amount()
            )));
        }
        student.apply_update(details, today);
        info!(student_id = id, status = %student.fee_status(), "student updated");
        Ok(student.clone())
    }

    /// Removes the student, returning the removed record.
    pub fn remove(school: &mut School, id: RecordId) -> ServiceResult<StudentRecord> {
        let removed = school.remove_student(id).ok_or_else(|| Self::not_found(id))?;
        info!(student_id = id, "student deleted");
        Ok(removed)
    }

    /// Applies a fee payment of `0 < amount <= balance`. Anything else is
    /// rejected without touching the record.
    pub fn record_payment(
        school: &mut School,
        id: RecordId,
        amount: f64,
        method: PaymentMethod,
        today: NaiveDate,
    ) -> ServiceResult<StudentRecord> {
        let student = school.student_mut(id).ok_or_else(|| Self::not_found(id))?;
        let outstanding = student.balance();
        if !amount.is_finite() || amount <= 0.0 || cents(amount) > cents(outstanding) {
            warn!(student_id = id, amount, outstanding, "fee payment rejected");
            return Err(ServiceError::InvalidAmount {
                amount,
                outstanding,
            });
        }
        student.apply_payment(amount, method, today);
        info!(
            student_id = id,
            amount,
            method = %method,
            status = %student.fee_status(),
            "fee payment recorded"
        );
        Ok(student.clone())
    }

    /// History newest first, plus the current fee summary.
    pub fn history(school: &School, id: RecordId) -> ServiceResult<StudentHistory> {
        let student = school.student(id).ok_or_else(|| Self::not_found(id))?;
        Ok(StudentHistory {
            student_id: student.id,
            name: student.name.clone(),
            entries: student.history().newest_first(),
            total_fee: student.total_fee,
            paid_amount: student.paid_amount(),
            balance: student.balance(),
            fee_status: student.fee_status(),
        })
    }

    /// Every student in enrolment order.
    pub fn list(school: &School) -> Vec<&StudentRecord> {
        school.students.iter().collect()
    }

    fn validate(details: &StudentDetails) -> ServiceResult<()> {
        require_text("name", &details.name)?;
        require_text("parent contact", &details.parent_contact)?;
        require_amount("total fee", details.total_fee)
    }

    fn not_found(id: RecordId) -> ServiceError {
        ServiceError::NotFound(format!("student {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeeStatus, LedgerAction};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
    }

    fn details(fee: f64) -> StudentDetails {
        StudentDetails::new("John Doe", 10, 16, "0244123456", fee)
    }

    #[test]
    fn add_rejects_negative_fee_and_blank_name() {
        let mut school = School::new();
        let err = StudentService::add(&mut school, details(-1.0), today()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let blank = StudentDetails::new("   ", 10, 16, "0244123456", 100.0);
        let err = StudentService::add(&mut school, blank, today()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref msg) if msg.contains("name")));
        assert!(school.students.is_empty());
    }

    #[test]
    fn rejected_payment_leaves_history_untouched() {
        let mut school = School::new();
        let student = StudentService::add(&mut school, details(500.0), today()).unwrap();

        for amount in [0.0, -20.0, 500.01, f64::NAN] {
            let err = StudentService::record_payment(
                &mut school,
                student.id,
                amount,
                PaymentMethod::Cash,
                today(),
            )
            .unwrap_err();
            assert!(matches!(err, ServiceError::InvalidAmount { .. }));
        }

        let stored = school.student(student.id).unwrap();
        assert_eq!(stored.paid_amount(), 0.0);
        assert_eq!(stored.history().len(), 1);
        assert_eq!(stored.fee_status(), FeeStatus::Unpaid);
    }

    #[test]
    fn payment_for_unknown_student_is_not_found() {
        let mut school = School::new();
        let err = StudentService::record_payment(&mut school, 9, 10.0, PaymentMethod::Cash, today())
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound("student 9".into()));
    }

    #[test]
    fn update_recomputes_status_and_rejects_fee_below_paid() {
        let mut school = School::new();
        let student = StudentService::add(&mut school, details(1000.0), today()).unwrap();
        StudentService::record_payment(
            &mut school,
            student.id,
            600.0,
            PaymentMethod::Cheque,
            today(),
        )
        .unwrap();

        let updated =
            StudentService::update(&mut school, student.id, details(600.0), today()).unwrap();
        assert_eq!(updated.fee_status(), FeeStatus::Paid);
        assert_eq!(
            updated.history().entries().last().map(|e| e.action),
            Some(LedgerAction::InfoUpdated)
        );

        let err =
            StudentService::update(&mut school, student.id, details(500.0), today()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(school.student(student.id).unwrap().total_fee, 600.0);
    }

    #[test]
    fn history_summarises_balance() {
        let mut school = School::new();
        let student = StudentService::add(&mut school, details(5000.0), today()).unwrap();
        StudentService::record_payment(
            &mut school,
            student.id,
            1500.0,
            PaymentMethod::Cash,
            today(),
        )
        .unwrap();

        let history = StudentService::history(&school, student.id).unwrap();
        assert_eq!(history.balance, 3500.0);
        assert_eq!(history.fee_status, FeeStatus::Partial);
        assert_eq!(history.entries.len(), 2);
    }

    #[test]
    fn fractional_balance_can_be_settled_exactly() {
        let mut school = School::new();
        let student = StudentService::add(&mut school, details(0.3), today()).unwrap();
        StudentService::record_payment(&mut school, student.id, 0.1, PaymentMethod::Cash, today())
            .unwrap();

        let settled = StudentService::record_payment(
            &mut school,
            student.id,
            0.2,
            PaymentMethod::Cash,
            today(),
        )
        .unwrap();
        assert_eq!(settled.fee_status(), FeeStatus::Paid);
        assert_eq!(settled.balance(), 0.0);
        assert_eq!(settled.paid_amount(), 0.3);

        let err = StudentService::record_payment(
            &mut school,
            student.id,
            0.01,
            PaymentMethod::Cash,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidAmount { .. }));
    }
}
