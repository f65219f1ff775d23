use crate::domain::{
    common::{next_id, RecordId},
    salary::{project_obligations, ObligationKey, SalaryObligation, SalaryWindow},
    student::StudentRecord,
    teacher::TeacherRecord,
};

/// In-memory store of students, teachers, and the salary obligations
/// projected from them.
#[derive(Debug, Clone, Default)]
pub struct School {
    pub students: Vec<StudentRecord>,
    pub teachers: Vec<TeacherRecord>,
    salary_records: Vec<SalaryObligation>,
}

impl School {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_student_id(&self) -> RecordId {
        next_id(&self.students)
    }

    pub fn next_teacher_id(&self) -> RecordId {
        next_id(&self.teachers)
    }

    pub fn student(&self, id: RecordId) -> Option<&StudentRecord> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn student_mut(&mut self, id: RecordId) -> Option<&mut StudentRecord> {
        self.students.iter_mut().find(|student| student.id == id)
    }

    pub fn teacher(&self, id: RecordId) -> Option<&TeacherRecord> {
        self.teachers.iter().find(|teacher| teacher.id == id)
    }

    pub fn teacher_mut(&mut self, id: RecordId) -> Option<&mut TeacherRecord> {
        self.teachers.iter_mut().find(|teacher| teacher.id == id)
    }

    pub fn add_student(&mut self, student: StudentRecord) -> RecordId {
        let id = student.id;
        self.students.push(student);
        id
    }

    pub fn add_teacher(&mut self, teacher: TeacherRecord) -> RecordId {
        let id = teacher.id;
        self.teachers.push(teacher);
        id
    }

    pub fn remove_student(&mut self, id: RecordId) -> Option<StudentRecord> {
        let index = self.students.iter().position(|student| student.id == id)?;
        Some(self.students.remove(index))
    }

    /// Removes the teacher together with every obligation that references it.
    pub fn remove_teacher(&mut self, id: RecordId) -> Option<TeacherRecord> {
        let index = self.teachers.iter().position(|teacher| teacher.id == id)?;
        self.salary_records
            .retain(|obligation| obligation.teacher_id() != id);
        Some(self.teachers.remove(index))
    }

    pub fn salary_records(&self) -> &[SalaryObligation] {
        &self.salary_records
    }

    pub fn obligation(&self, key: ObligationKey) -> Option<&SalaryObligation> {
        self.salary_records
            .iter()
            .find(|obligation| obligation.key == key)
    }

    /// Replaces the obligation set with a fresh projection over `window`.
    pub fn regenerate_salaries(&mut self, window: SalaryWindow) -> usize {
        self.salary_records = project_obligations(&self.teachers, window);
        self.salary_records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{month::MonthKey, teacher::TeacherDetails};
    use chrono::NaiveDate;

    fn hire(school: &mut School, name: &str) -> RecordId {
        let id = school.next_teacher_id();
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        school.add_teacher(TeacherRecord::hire(
            id,
            TeacherDetails::new(name, "Science", 3, "0240000000", 2500.0),
            date,
        ))
    }

    #[test]
    fn removing_teacher_drops_only_its_obligations() {
        let mut school = School::new();
        let first = hire(&mut school, "Ama");
        let second = hire(&mut school, "Yaw");
        school.regenerate_salaries(SalaryWindow::ending(MonthKey::new(2025, 9).unwrap()));
        assert_eq!(school.salary_records().len(), 12);

        let removed = school.remove_teacher(first).expect("teacher exists");
        assert_eq!(removed.id, first);
        assert_eq!(school.salary_records().len(), 6);
        assert!(school
            .salary_records()
            .iter()
            .all(|obligation| obligation.teacher_id() == second));
    }

    #[test]
    fn removing_unknown_records_is_none() {
        let mut school = School::new();
        assert!(school.remove_student(4).is_none());
        assert!(school.remove_teacher(4).is_none());
    }
}
