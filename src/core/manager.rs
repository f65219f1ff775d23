use tracing::debug;

use crate::config::Config;
use crate::core::services::{
    SalaryService, SearchService, ServiceResult, StudentService, SummaryService, TeacherService,
};
use crate::core::time::Clock;
use crate::domain::{
    report::{
        ActivityItem, AnalyticsOverview, DashboardTotals, FeeReport, FeeRow, PayrollBatch,
        SalaryReport, StaffReport, StudentHistory, TeacherHistory,
    },
    MonthKey, ObligationKey, PaymentMethod, RecordId, SalaryObligation, SalaryWindow, School,
    StudentDetails, StudentRecord, TeacherDetails, TeacherRecord,
};

/// Facade that owns the school store and dates every command with its clock.
pub struct SchoolManager {
    school: School,
    config: Config,
    clock: Box<dyn Clock>,
    projected: Option<SalaryWindow>,
}

impl SchoolManager {
    pub fn new(config: Config, clock: Box<dyn Clock>) -> Self {
        Self::with_school(School::new(), config, clock)
    }

    /// Takes over an existing store; obligations are rebuilt for the
    /// clock's current window.
    pub fn with_school(school: School, config: Config, clock: Box<dyn Clock>) -> Self {
        let mut manager = Self {
            school,
            config,
            clock,
            projected: None,
        };
        manager.refresh_salaries();
        manager
    }

    pub fn school(&self) -> &School {
        &self.school
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn current_month(&self) -> MonthKey {
        self.clock.current_month()
    }

    pub fn window(&self) -> SalaryWindow {
        SalaryWindow::new(
            self.current_month(),
            self.config.salary_window_months.max(1),
        )
    }

    /// Re-projects obligations for the clock's current window.
    pub fn refresh_salaries(&mut self) -> usize {
        let window = self.window();
        self.projected = Some(window);
        SalaryService::regenerate(&mut self.school, window)
    }

    /// Re-projects only when the clock has moved past the last projected
    /// window.
    pub fn sync_salaries(&mut self) {
        if self.projected != Some(self.window()) {
            self.refresh_salaries();
        }
    }

    pub fn students(&self) -> Vec<&StudentRecord> {
        StudentService::list(&self.school)
    }

    pub fn teachers(&self) -> Vec<&TeacherRecord> {
        TeacherService::list(&self.school)
    }

    pub fn add_student(&mut self, details: StudentDetails) -> ServiceResult<StudentRecord> {
        StudentService::add(&mut self.school, details, self.clock.today())
    }

    pub fn update_student(
        &mut self,
        id: RecordId,
        details: StudentDetails,
    ) -> ServiceResult<StudentRecord> {
        StudentService::update(&mut self.school, id, details, self.clock.today())
    }

    pub fn delete_student(&mut self, id: RecordId) -> ServiceResult<StudentRecord> {
        StudentService::remove(&mut self.school, id)
    }

    pub fn record_fee_payment(
        &mut self,
        id: RecordId,
        amount: f64,
        method: PaymentMethod,
    ) -> ServiceResult<StudentRecord> {
        StudentService::record_payment(&mut self.school, id, amount, method, self.clock.today())
    }

    pub fn student_history(&self, id: RecordId) -> ServiceResult<StudentHistory> {
        StudentService::history(&self.school, id)
    }

    pub fn add_teacher(&mut self, details: TeacherDetails) -> ServiceResult<TeacherRecord> {
        let teacher = TeacherService::add(&mut self.school, details, self.clock.today())?;
        self.refresh_salaries();
        Ok(teacher)
    }

    pub fn update_teacher(
        &mut self,
        id: RecordId,
        details: TeacherDetails,
    ) -> ServiceResult<TeacherRecord> {
        let teacher = TeacherService::update(&mut self.school, id, details, self.clock.today())?;
        self.refresh_salaries();
        Ok(teacher)
    }

    pub fn delete_teacher(&mut self, id: RecordId) -> ServiceResult<TeacherRecord> {
        let teacher = TeacherService::remove(&mut self.school, id)?;
        self.refresh_salaries();
        Ok(teacher)
    }

    pub fn teacher_history(&self, id: RecordId) -> ServiceResult<TeacherHistory> {
        TeacherService::history(&self.school, id)
    }

    pub fn pay_salary(&mut self, key: ObligationKey) -> ServiceResult<SalaryObligation> {
        let window = self.window();
        self.projected = Some(window);
        SalaryService::pay(&mut self.school, key, self.clock.today(), window)
    }

    pub fn pay_all_pending(&mut self) -> PayrollBatch {
        let window = self.window();
        self.projected = Some(window);
        SalaryService::pay_all_pending(&mut self.school, self.clock.today(), window)
    }

    pub fn salaries_for_month(&self, month: Option<MonthKey>) -> Vec<&SalaryObligation> {
        SalaryService::for_month(&self.school, month)
    }

    pub fn dashboard(&mut self) -> DashboardTotals {
        self.sync_salaries();
        SummaryService::dashboard(&self.school, self.current_month())
    }

    /// Falls back to the configured limit when `limit` is `None`.
    pub fn recent_activity(&self, limit: Option<usize>) -> Vec<ActivityItem> {
        let limit = limit.unwrap_or(self.config.recent_activity_limit);
        debug!(limit, "collecting recent activity");
        SummaryService::recent_activity(&self.school, limit)
    }

    pub fn fee_report(&self) -> FeeReport {
        SummaryService::fee_report(&self.school)
    }

    pub fn salary_report(&mut self) -> SalaryReport {
        self.sync_salaries();
        SummaryService::salary_report(&self.school)
    }

    pub fn staff_report(&self) -> StaffReport {
        SummaryService::staff_report(&self.school)
    }

    pub fn analytics(&self) -> AnalyticsOverview {
        SummaryService::analytics(&self.school)
    }

    pub fn search_students(&self, query: &str) -> Vec<&StudentRecord> {
        SearchService::students(&self.school, query)
    }

    pub fn search_teachers(&self, query: &str) -> Vec<&TeacherRecord> {
        SearchService::teachers(&self.school, query)
    }

    pub fn search_salaries(&self, query: &str) -> Vec<&SalaryObligation> {
        SearchService::salaries(&self.school, query)
    }

    pub fn search_fees(&self, query: &str) -> Vec<FeeRow> {
        SearchService::fees(&self.school, query)
    }
}
