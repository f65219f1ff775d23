//! Business logic helpers for hiring and maintaining teachers.

use chrono::NaiveDate;
use tracing::info;

use crate::core::services::{require_amount, require_text, ServiceError, ServiceResult};
use crate::domain::{
    report::TeacherHistory, Chronicled, RecordId, School, TeacherDetails, TeacherRecord,
};

/// Validated commands and queries over the school's teachers. Callers are
/// responsible for regenerating salary obligations afterwards;
/// [`crate::core::SchoolManager`] does so automatically.
pub struct TeacherService;

impl TeacherService {
    pub fn add(
        school: &mut School,
        details: TeacherDetails,
        today: NaiveDate,
    ) -> ServiceResult<TeacherRecord> {
        Self::validate(&details)?;
        let id = school.next_teacher_id();
        let record = TeacherRecord::hire(id, details, today);
        school.add_teacher(record.clone());
        info!(teacher_id = id, "teacher hired");
        Ok(record)
    }

    pub fn update(
        school: &mut School,
        id: RecordId,
        details: TeacherDetails,
        today: NaiveDate,
    ) -> ServiceResult<TeacherRecord> {
        Self::validate(&details)?;
        let teacher = school
            .teacher_mut(id)
            .ok_or_else(|| Self::not_found(id))?;
        teacher.apply_update(details, today);
        info!(teacher_id = id, "teacher updated");
        Ok(teacher.clone())
    }

    /// Removes the teacher and every salary obligation that references it.
    pub fn remove(school: &mut School, id: RecordId) -> ServiceResult<TeacherRecord> {
        let removed = school.remove_teacher(id).ok_or_else(|| Self::not_found(id))?;
        info!(teacher_id = id, "teacher deleted");
        Ok(removed)
    }

    pub fn history(school: &School, id: RecordId) -> ServiceResult<TeacherHistory> {
        let teacher = school.teacher(id).ok_or_else(|| Self::not_found(id))?;
        Ok(TeacherHistory {
            teacher_id: teacher.id,
            name: teacher.name.clone(),
            subject: teacher.subject.clone(),
            entries: teacher.history().newest_first(),
            summary: teacher.salary_summary(),
        })
    }

    /// Every teacher in hiring order.
    pub fn list(school: &School) -> Vec<&TeacherRecord> {
        school.teachers.iter().collect()
    }

    fn validate(details: &TeacherDetails) -> ServiceResult<()> {
        require_text("name", &details.name)?;
        require_text("subject", &details.subject)?;
        require_text("contact", &details.contact)?;
        require_amount("monthly salary", details.monthly_salary)
    }

    fn not_found(id: RecordId) -> ServiceError {
        ServiceError::NotFound(format!("teacher {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LedgerAction, MonthKey, SalaryWindow};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
    }

    fn details(salary: f64) -> TeacherDetails {
        TeacherDetails::new("Emily Davis", "Science", 5, "0241456789", salary)
    }

    #[test]
    fn add_rejects_negative_salary() {
        let mut school = School::new();
        let err = TeacherService::add(&mut school, details(-5.0), today()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref msg) if msg.contains("salary")));
        assert!(school.teachers.is_empty());
    }

    #[test]
    fn add_starts_history_with_hire_entry() {
        let mut school = School::new();
        let teacher = TeacherService::add(&mut school, details(3200.0), today()).unwrap();
        assert_eq!(teacher.id, 1);
        let history = TeacherService::history(&school, teacher.id).unwrap();
        assert_eq!(history.entries.len(), 1);
        assert_eq!(history.entries[0].action, LedgerAction::Hired);
        assert_eq!(history.summary.payment_count, 0);
    }

    #[test]
    fn update_and_remove_unknown_teacher_fail() {
        let mut school = School::new();
        assert!(matches!(
            TeacherService::update(&mut school, 3, details(1.0), today()),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            TeacherService::remove(&mut school, 3),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn remove_cascades_to_obligations() {
        let mut school = School::new();
        let kept = TeacherService::add(&mut school, details(3000.0), today()).unwrap();
        let gone = TeacherService::add(&mut school, details(3500.0), today()).unwrap();
        school.regenerate_salaries(SalaryWindow::ending(MonthKey::from_date(today())));

        TeacherService::remove(&mut school, gone.id).unwrap();
        assert_eq!(school.salary_records().len(), 6);
        assert!(school
            .salary_records()
            .iter()
            .all(|obligation| obligation.teacher_id() == kept.id));
    }
}
