use crate::domain::{
    report::{
        ActivityItem, ActivityOwner, AnalyticsOverview, DashboardTotals, FeeReport, FeeRow,
        SalaryReport, StaffReport, StaffRow,
    },
    Chronicled, MonthKey, NamedEntity, RecordId, SalaryStatus, School,
};

/// Pure aggregations over a [`School`]; nothing here mutates.
pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(school: &School, current: MonthKey) -> DashboardTotals {
        let total_salaries_paid_this_month: f64 = school
            .salary_records()
            .iter()
            .filter(|obligation| {
                obligation.month() == current && obligation.status == SalaryStatus::Paid
            })
            .map(|obligation| obligation.amount)
            .sum();
        DashboardTotals {
            student_count: school.students.len(),
            teacher_count: school.teachers.len(),
            total_fees_collected: school.students.iter().map(|s| s.paid_amount()).sum(),
            outstanding_fees: school.students.iter().map(|s| s.balance()).sum(),
            total_salaries_paid_this_month,
        }
    }

    /// Latest `limit` history entries across students then teachers, newest
    /// first. Same-day entries keep that merge order.
    pub fn recent_activity(school: &School, limit: usize) -> Vec<ActivityItem> {
        let mut items: Vec<ActivityItem> = Vec::new();
        for student in &school.students {
            collect_activity(&mut items, ActivityOwner::Student, student.id, student);
        }
        for teacher in &school.teachers {
            collect_activity(&mut items, ActivityOwner::Teacher, teacher.id, teacher);
        }
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(limit);
        items
    }

    pub fn fee_report(school: &School) -> FeeReport {
        let rows: Vec<FeeRow> = school
            .students
            .iter()
            .map(|student| FeeRow {
                student_id: student.id,
                name: student.name.clone(),
                total_fee: student.total_fee,
                paid_amount: student.paid_amount(),
                balance: student.balance(),
                status: student.fee_status(),
                last_payment: student.last_payment(),
            })
            .collect();
        let total_fees: f64 = rows.iter().map(|row| row.total_fee).sum();
        let total_paid: f64 = rows.iter().map(|row| row.paid_amount).sum();
        let total_balance: f64 = rows.iter().map(|row| row.balance).sum();
        FeeReport {
            rows,
            total_fees,
            total_paid,
            total_balance,
        }
    }

    pub fn salary_report(school: &School) -> SalaryReport {
        let mut report = SalaryReport {
            obligations: school.salary_records().to_vec(),
            total_paid: 0.0,
            total_pending: 0.0,
            paid_count: 0,
            pending_count: 0,
        };
        for obligation in school.salary_records() {
            if obligation.is_pending() {
                report.total_pending += obligation.amount;
                report.pending_count += 1;
            } else {
                report.total_paid += obligation.amount;
                report.paid_count += 1;
            }
        }
        report
    }

    pub fn staff_report(school: &School) -> StaffReport {
        let rows: Vec<StaffRow> = school
            .teachers
            .iter()
            .map(|teacher| StaffRow {
                teacher_id: teacher.id,
                name: teacher.name.clone(),
                subject: teacher.subject.clone(),
                experience: teacher.experience,
                contact: teacher.contact.clone(),
                monthly_salary: teacher.monthly_salary,
            })
            .collect();
        let total_monthly_payroll: f64 = rows.iter().map(|row| row.monthly_salary).sum();
        StaffReport {
            rows,
            total_monthly_payroll,
        }
    }

    pub fn analytics(school: &School) -> AnalyticsOverview {
        let fees = Self::fee_report(school);
        let collection_rate = if fees.total_fees > 0.0 {
            fees.total_paid / fees.total_fees * 100.0
        } else {
            0.0
        };
        AnalyticsOverview {
            student_count: school.students.len(),
            teacher_count: school.teachers.len(),
            total_fees_expected: fees.total_fees,
            total_fees_collected: fees.total_paid,
            outstanding_fees: fees.total_balance,
            collection_rate,
            monthly_payroll: school.teachers.iter().map(|t| t.monthly_salary).sum(),
        }
    }
}

fn collect_activity<T>(
    items: &mut Vec<ActivityItem>,
    owner: ActivityOwner,
    owner_id: RecordId,
    entity: &T,
) where
    T: Chronicled + NamedEntity,
{
    items.extend(entity.history().iter().map(|entry| ActivityItem {
        owner,
        owner_id,
        owner_name: entity.name().to_string(),
        date: entry.date,
        action: entry.action,
        amount: entry.amount,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{SalaryService, StudentService, TeacherService};
    use crate::domain::{
        LedgerAction, ObligationKey, PaymentMethod, SalaryWindow, StudentDetails, TeacherDetails,
    };
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn populated() -> (School, SalaryWindow) {
        let mut school = School::new();
        let window = SalaryWindow::ending(MonthKey::new(2025, 9).unwrap());
        let first = StudentService::add(
            &mut school,
            StudentDetails::new("Kwame", 7, 12, "0200000001", 4000.0),
            date(6, 1),
        )
        .unwrap();
        StudentService::add(
            &mut school,
            StudentDetails::new("Abena", 8, 13, "0200000002", 6000.0),
            date(6, 2),
        )
        .unwrap();
        StudentService::record_payment(
            &mut school,
            first.id,
            1000.0,
            PaymentMethod::Cash,
            date(7, 1),
        )
        .unwrap();
        TeacherService::add(
            &mut school,
            TeacherDetails::new("Yaa", "History", 2, "0200000003", 2500.0),
            date(6, 3),
        )
        .unwrap();
        SalaryService::regenerate(&mut school, window);
        SalaryService::pay(
            &mut school,
            ObligationKey::new(1, window.current),
            date(9, 5),
            window,
        )
        .unwrap();
        (school, window)
    }

    #[test]
    fn dashboard_counts_current_month_paid_salaries() {
        let (school, window) = populated();
        let totals = SummaryService::dashboard(&school, window.current);
        assert_eq!(totals.student_count, 2);
        assert_eq!(totals.teacher_count, 1);
        assert_eq!(totals.total_fees_collected, 1000.0);
        assert_eq!(totals.outstanding_fees, 9000.0);
        assert_eq!(totals.total_salaries_paid_this_month, 2500.0);

        let previous = SummaryService::dashboard(&school, window.current.shift(-1));
        assert_eq!(previous.total_salaries_paid_this_month, 0.0);
    }

    #[test]
    fn recent_activity_is_newest_first_and_limited() {
        let (school, _) = populated();
        let items = SummaryService::recent_activity(&school, 3);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].action, LedgerAction::SalaryPaid);
        assert_eq!(items[0].owner, ActivityOwner::Teacher);
        assert_eq!(items[1].action, LedgerAction::FeePayment);
        assert_eq!(items[1].to_string(), "Kwame - Fee Payment");
        assert!(items.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn fee_and_salary_reports_total_up() {
        let (school, _) = populated();
        let fees = SummaryService::fee_report(&school);
        assert_eq!(fees.rows.len(), 2);
        assert_eq!(fees.total_fees, 10_000.0);
        assert_eq!(fees.total_paid, 1000.0);
        assert_eq!(fees.total_balance, 9000.0);
        assert_eq!(fees.rows[0].last_payment, Some(date(7, 1)));
        assert_eq!(fees.rows[1].last_payment, None);

        let salaries = SummaryService::salary_report(&school);
        assert_eq!(salaries.paid_count, 1);
        assert_eq!(salaries.pending_count, 5);
        assert_eq!(salaries.total_paid, 2500.0);
        assert_eq!(salaries.total_pending, 12_500.0);
    }

    #[test]
    fn analytics_reports_collection_rate() {
        let (school, _) = populated();
        let overview = SummaryService::analytics(&school);
        assert_eq!(overview.collection_rate, 10.0);
        assert_eq!(overview.monthly_payroll, 2500.0);
        assert_eq!(SummaryService::analytics(&School::new()).collection_rate, 0.0);

        let staff = SummaryService::staff_report(&school);
        assert_eq!(staff.rows.len(), 1);
        assert_eq!(staff.total_monthly_payroll, 2500.0);
    }
}
