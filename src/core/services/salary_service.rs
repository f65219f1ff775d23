//! Salary obligations: projection over a trailing window and payment.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{
    report::PayrollBatch, MonthKey, ObligationKey, SalaryObligation, SalaryWindow, School,
};

pub struct SalaryService;

impl SalaryService {
    /// Rebuilds every obligation in `window` from the current teachers and
    /// their histories. Returns the number of obligations produced.
    pub fn regenerate(school: &mut School, window: SalaryWindow) -> usize {
        let count = school.regenerate_salaries(window);
        debug!(
            count,
            current = %window.current,
            months = window.months,
            "salary obligations regenerated"
        );
        count
    }

    /// Pays one pending obligation of `window`: the teacher's history gains
    /// a salary entry dated `today` and the obligation set is regenerated.
    pub fn pay(
        school: &mut School,
        key: ObligationKey,
        today: NaiveDate,
        window: SalaryWindow,
    ) -> ServiceResult<SalaryObligation> {
        if !window.contains(key.month) {
            warn!(%key, current = %window.current, "salary month outside the window");
            return Err(ServiceError::NotFound(format!("salary obligation {key}")));
        }
        Self::regenerate(school, window);
        let obligation = school
            .obligation(key)
            .ok_or_else(|| ServiceError::NotFound(format!("salary obligation {key}")))?;
        if !obligation.is_pending() {
            warn!(%key, "salary already paid");
            return Err(ServiceError::AlreadyPaid(key));
        }
        let amount = obligation.amount;
        let teacher = school
            .teacher_mut(key.teacher_id)
            .ok_or_else(|| ServiceError::NotFound(format!("teacher {}", key.teacher_id)))?;
        teacher.record_salary(amount, key.month, today);
        info!(%key, amount, "salary paid");

        Self::regenerate(school, window);
        school
            .obligation(key)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("salary obligation {key}")))
    }

    /// Pays every pending obligation of `window` with one shared payment date.
    pub fn pay_all_pending(
        school: &mut School,
        today: NaiveDate,
        window: SalaryWindow,
    ) -> PayrollBatch {
        Self::regenerate(school, window);
        let pending: Vec<(ObligationKey, f64)> = school
            .salary_records()
            .iter()
            .filter(|obligation| obligation.is_pending())
            .map(|obligation| (obligation.key, obligation.amount))
            .collect();

        let mut batch = PayrollBatch {
            amount_paid: 0.0,
            count: 0,
            payment_date: today,
        };
        for (key, amount) in pending {
            let Some(teacher) = school.teacher_mut(key.teacher_id) else {
                warn!(%key, "skipping obligation without teacher");
                continue;
            };
            if teacher.salary_payment_for(key.month).is_some() {
                continue;
            }
            teacher.record_salary(amount, key.month, today);
            batch.amount_paid += amount;
            batch.count += 1;
        }

        Self::regenerate(school, window);
        info!(count = batch.count, amount = batch.amount_paid, "pending salaries paid");
        batch
    }

    /// Obligations for one month, or all of them when `month` is `None`.
    pub fn for_month(school: &School, month: Option<MonthKey>) -> Vec<&SalaryObligation> {
        school
            .salary_records()
            .iter()
            .filter(|obligation| month.map_or(true, |wanted| obligation.month() == wanted))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::TeacherService;
    use crate::domain::{Chronicled, LedgerAction, SalaryStatus, TeacherDetails};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 20).unwrap()
    }

    fn window() -> SalaryWindow {
        SalaryWindow::ending(MonthKey::from_date(today()))
    }

    fn school_with_teacher(salary: f64) -> School {
        let mut school = School::new();
        TeacherService::add(
            &mut school,
            TeacherDetails::new("David Brown", "English", 12, "0241987654", salary),
            today(),
        )
        .unwrap();
        SalaryService::regenerate(&mut school, window());
        school
    }

    #[test]
    fn regenerate_is_idempotent() {
        let mut school = school_with_teacher(4000.0);
        let first = school.salary_records().to_vec();
        SalaryService::regenerate(&mut school, window());
        assert_eq!(school.salary_records(), first.as_slice());
    }

    #[test]
    fn pay_marks_obligation_and_records_entry() {
        let mut school = school_with_teacher(3500.0);
        let key = ObligationKey::new(1, window().current);

        let paid = SalaryService::pay(&mut school, key, today(), window()).unwrap();
        assert_eq!(paid.status, SalaryStatus::Paid);
        assert_eq!(paid.payment_date, Some(today()));

        let teacher = school.teacher(1).unwrap();
        let salary_entries: Vec<_> = teacher
            .history()
            .of_action(LedgerAction::SalaryPaid)
            .collect();
        assert_eq!(salary_entries.len(), 1);
        assert_eq!(salary_entries[0].amount, 3500.0);

        let err = SalaryService::pay(&mut school, key, today(), window()).unwrap_err();
        assert_eq!(err, ServiceError::AlreadyPaid(key));
        assert_eq!(
            school
                .teacher(1)
                .unwrap()
                .history()
                .of_action(LedgerAction::SalaryPaid)
                .count(),
            1
        );
    }

    #[test]
    fn pay_unknown_key_is_not_found() {
        let mut school = school_with_teacher(3500.0);
        let outside = ObligationKey::new(1, window().current.shift(-6));
        assert!(matches!(
            SalaryService::pay(&mut school, outside, today(), window()),
            Err(ServiceError::NotFound(_))
        ));
        let stranger = ObligationKey::new(42, window().current);
        assert!(matches!(
            SalaryService::pay(&mut school, stranger, today(), window()),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn pay_all_pending_clears_the_window() {
        let mut school = school_with_teacher(3000.0);
        let key = ObligationKey::new(1, window().current.shift(-2));
        SalaryService::pay(&mut school, key, today(), window()).unwrap();

        let batch = SalaryService::pay_all_pending(&mut school, today(), window());
        assert_eq!(batch.count, 5);
        assert_eq!(batch.amount_paid, 15_000.0);
        assert!(school.salary_records().iter().all(|o| !o.is_pending()));

        let again = SalaryService::pay_all_pending(&mut school, today(), window());
        assert_eq!(again.count, 0);
        assert_eq!(again.amount_paid, 0.0);
    }

    #[test]
    fn payments_follow_the_window_they_are_given() {
        let mut school = school_with_teacher(1000.0);
        let next = SalaryWindow::ending(window().current.shift(1));
        let dropped = ObligationKey::new(1, window().current.shift(-5));

        assert!(matches!(
            SalaryService::pay(&mut school, dropped, today(), next),
            Err(ServiceError::NotFound(_))
        ));

        let batch = SalaryService::pay_all_pending(&mut school, today(), next);
        assert_eq!(batch.count, 6);
        assert!(school
            .salary_records()
            .iter()
            .all(|o| !o.is_pending() && next.contains(o.month())));
        assert!(school.teacher(1).unwrap().salary_payment_for(dropped.month).is_none());
    }

    #[test]
    fn month_filter_selects_single_month() {
        let school = school_with_teacher(3000.0);
        let current = window().current;
        let selected = SalaryService::for_month(&school, Some(current));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].month(), current);
        assert_eq!(SalaryService::for_month(&school, None).len(), 6);
    }
}
