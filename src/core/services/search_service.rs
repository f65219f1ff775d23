//! Case-insensitive substring filters backing the search boxes of each table.

use crate::domain::{report::FeeRow, SalaryObligation, School, StudentRecord, TeacherRecord};

use super::SummaryService;

pub struct SearchService;

impl SearchService {
    /// Matches name, grade, parent contact, or fee status.
    pub fn students<'a>(school: &'a School, query: &str) -> Vec<&'a StudentRecord> {
        let needle = Needle::new(query);
        school
            .students
            .iter()
            .filter(|student| {
                needle.matches(&student.name)
                    || needle.matches(&student.grade.to_string())
                    || needle.matches(&student.parent_contact)
                    || needle.matches(student.fee_status().label())
            })
            .collect()
    }

    /// Matches name, subject, contact, or years of experience.
    pub fn teachers<'a>(school: &'a School, query: &str) -> Vec<&'a TeacherRecord> {
        let needle = Needle::new(query);
        school
            .teachers
            .iter()
            .filter(|teacher| {
                needle.matches(&teacher.name)
                    || needle.matches(&teacher.subject)
                    || needle.matches(&teacher.contact)
                    || needle.matches(&teacher.experience.to_string())
            })
            .collect()
    }

    /// Matches teacher name, subject, month label, status, or teacher id.
    pub fn salaries<'a>(school: &'a School, query: &str) -> Vec<&'a SalaryObligation> {
        let needle = Needle::new(query);
        school
            .salary_records()
            .iter()
            .filter(|obligation| {
                needle.matches(&obligation.teacher_name)
                    || needle.matches(&obligation.subject)
                    || needle.matches(&obligation.month_label())
                    || needle.matches(obligation.status.label())
                    || needle.matches(&obligation.teacher_id().to_string())
            })
            .collect()
    }

    /// Fee rows matching student name, id, or fee status.
    pub fn fees(school: &School, query: &str) -> Vec<FeeRow> {
        let needle = Needle::new(query);
        SummaryService::fee_report(school)
            .rows
            .into_iter()
            .filter(|row| {
                needle.matches(&row.name)
                    || needle.matches(&row.student_id.to_string())
                    || needle.matches(row.status.label())
            })
            .collect()
    }
}

struct Needle(String);

impl Needle {
    fn new(query: &str) -> Self {
        Self(query.trim().to_lowercase())
    }

    /// An empty query matches everything.
    fn matches(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::demo_school;
    use chrono::NaiveDate;

    fn school() -> School {
        demo_school(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap())
    }

    #[test]
    fn student_search_covers_status_and_grade() {
        let school = school();
        let partial = SearchService::students(&school, "partial");
        assert_eq!(partial.len(), 2);
        let grade_twelve = SearchService::students(&school, "12");
        assert!(grade_twelve.iter().any(|s| s.name == "Michael Johnson"));
        assert_eq!(SearchService::students(&school, "").len(), school.students.len());
    }

    #[test]
    fn teacher_search_matches_subject_case_insensitively() {
        let school = school();
        let found = SearchService::teachers(&school, "MATHEMATICS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Dr. Sarah Wilson");
    }

    #[test]
    fn salary_search_matches_month_label() {
        let school = school();
        let august = SearchService::salaries(&school, "august 2025");
        assert_eq!(august.len(), school.teachers.len());
        assert!(august.iter().all(|o| !o.is_pending()));
    }

    #[test]
    fn fee_search_matches_name() {
        let school = school();
        let rows = SearchService::fees(&school, "jane");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].balance, 0.0);
    }
}
