pub mod common;
pub mod history;
pub mod month;
pub mod report;
pub mod salary;
pub mod school;
pub mod student;
pub mod teacher;

pub use common::{Chronicled, Displayable, Identifiable, NamedEntity, ParseError, RecordId};
pub use history::{History, LedgerAction, LedgerEntry, PaymentMethod};
pub use month::MonthKey;
pub use salary::{ObligationKey, SalaryObligation, SalaryStatus, SalaryWindow};
pub use school::School;
pub use student::{FeeStatus, StudentDetails, StudentRecord};
pub use teacher::{SalarySummary, TeacherDetails, TeacherRecord};
