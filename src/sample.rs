//! Demo roster used by the shell and by tests that want realistic data.

use chrono::NaiveDate;

use crate::domain::{
    MonthKey, PaymentMethod, SalaryWindow, School, StudentDetails, StudentRecord, TeacherDetails,
    TeacherRecord,
};

struct DemoStudent {
    details: (&'static str, u8, u8, &'static str, f64),
    enrolled: (i32, u32, u32),
    payments: &'static [((i32, u32, u32), f64, PaymentMethod)],
}

struct DemoTeacher {
    details: (&'static str, &'static str, u8, &'static str, f64),
    hired: (i32, u32, u32),
    /// (paid on, salary month)
    salaries: &'static [((i32, u32, u32), (i32, u32))],
}

const STUDENTS: &[DemoStudent] = &[
    DemoStudent {
        details: ("John Doe", 10, 16, "0244123456", 5000.0),
        enrolled: (2025, 6, 1),
        payments: &[
            ((2025, 7, 1), 1500.0, PaymentMethod::BankTransfer),
            ((2025, 8, 15), 1500.0, PaymentMethod::Cash),
        ],
    },
    DemoStudent {
        details: ("Jane Smith", 8, 14, "0244789012", 4500.0),
        enrolled: (2025, 6, 15),
        payments: &[((2025, 9, 1), 4500.0, PaymentMethod::MobileMoney)],
    },
    DemoStudent {
        details: ("Michael Johnson", 12, 18, "0244345678", 6000.0),
        enrolled: (2025, 6, 10),
        payments: &[((2025, 7, 20), 2000.0, PaymentMethod::Cheque)],
    },
];

const TEACHERS: &[DemoTeacher] = &[
    DemoTeacher {
        details: ("Dr. Sarah Wilson", "Mathematics", 8, "0241234567", 3500.0),
        hired: (2025, 6, 1),
        salaries: &[((2025, 8, 1), (2025, 8)), ((2025, 9, 1), (2025, 9))],
    },
    DemoTeacher {
        details: ("Prof. David Brown", "English Literature", 12, "0241987654", 4000.0),
        hired: (2025, 5, 15),
        salaries: &[((2025, 8, 1), (2025, 8)), ((2025, 9, 1), (2025, 9))],
    },
    DemoTeacher {
        details: ("Ms. Emily Davis", "Science", 5, "0241456789", 3200.0),
        hired: (2025, 7, 1),
        salaries: &[((2025, 8, 1), (2025, 8)), ((2025, 9, 1), (2025, 9))],
    },
];

/// Three students and three teachers with their 2025 histories, salary
/// obligations projected over the default window ending at `today`.
pub fn demo_school(today: NaiveDate) -> School {
    let mut school = School::new();

    for demo in STUDENTS {
        let (name, grade, age, contact, fee) = demo.details;
        let mut student = StudentRecord::enroll(
            school.next_student_id(),
            StudentDetails::new(name, grade, age, contact, fee),
            ymd(demo.enrolled),
        );
        for &(paid_on, amount, method) in demo.payments {
            student.apply_payment(amount, method, ymd(paid_on));
        }
        school.add_student(student);
    }

    for demo in TEACHERS {
        let (name, subject, experience, contact, salary) = demo.details;
        let mut teacher = TeacherRecord::hire(
            school.next_teacher_id(),
            TeacherDetails::new(name, subject, experience, contact, salary),
            ymd(demo.hired),
        );
        for &(paid_on, (year, month)) in demo.salaries {
            if let Some(month) = MonthKey::new(year, month) {
                teacher.record_salary(salary, month, ymd(paid_on));
            }
        }
        school.add_teacher(teacher);
    }

    school.regenerate_salaries(SalaryWindow::ending(MonthKey::from_date(today)));
    school
}

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
