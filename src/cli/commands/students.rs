use crate::cli::commands::{expect_args, parse_arg, usage_error, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::currency::{format_amount, format_optional_date};
use crate::domain::{
    report::FeeRow, Displayable, PaymentMethod, RecordId, StudentDetails, StudentRecord,
};

const ADD_USAGE: &str = "add-student NAME GRADE AGE CONTACT FEE";
const UPDATE_USAGE: &str = "update-student ID NAME GRADE AGE CONTACT FEE";
const PAY_USAGE: &str = "pay-fee ID AMOUNT [METHOD]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("students", "List enrolled students", "students", cmd_list),
        CommandDefinition::new("fees", "Fee balances per student", "fees", cmd_fees),
        CommandDefinition::new("add-student", "Enrol a student", ADD_USAGE, cmd_add),
        CommandDefinition::new(
            "update-student",
            "Edit a student's details",
            UPDATE_USAGE,
            cmd_update,
        ),
        CommandDefinition::new("pay-fee", "Record a fee payment", PAY_USAGE, cmd_pay),
        CommandDefinition::new(
            "delete-student",
            "Remove a student",
            "delete-student ID",
            cmd_delete,
        ),
    ]
}

pub(crate) fn render_students(students: &[&StudentRecord]) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Name"),
        TableColumn::right("Grade"),
        TableColumn::right("Age"),
        TableColumn::left("Parent contact"),
        TableColumn::right("Total fee"),
        TableColumn::right("Paid"),
        TableColumn::left("Status"),
    ]);
    for student in students {
        table.push(vec![
            student.id.to_string(),
            student.name.clone(),
            student.grade.to_string(),
            student.age.to_string(),
            student.parent_contact.clone(),
            format_amount(student.total_fee),
            format_amount(student.paid_amount()),
            student.fee_status().to_string(),
        ]);
    }
    table.render()
}

pub(crate) fn render_fee_rows(rows: &[FeeRow]) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Student"),
        TableColumn::right("Total fee"),
        TableColumn::right("Paid"),
        TableColumn::right("Balance"),
        TableColumn::left("Status"),
        TableColumn::left("Last payment"),
    ]);
    for row in rows {
        table.push(vec![
            row.student_id.to_string(),
            row.name.clone(),
            format_amount(row.total_fee),
            format_amount(row.paid_amount),
            format_amount(row.balance),
            row.status.to_string(),
            format_optional_date(row.last_payment),
        ]);
    }
    table.render()
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let students = context.manager.students();
    output::section("Students");
    if students.is_empty() {
        output::info("No students enrolled.");
    } else {
        output::info(render_students(&students));
    }
    Ok(())
}

fn cmd_fees(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = context.manager.fee_report();
    output::section("Fee management");
    output::info(render_fee_rows(&report.rows));
    output::info(format!("Total fees : {}", context.money(report.total_fees)));
    output::info(format!("Total paid : {}", context.money(report.total_paid)));
    output::info(format!("Outstanding: {}", context.money(report.total_balance)));
    Ok(())
}

fn details(args: &[&str]) -> Result<StudentDetails, CommandError> {
    Ok(StudentDetails::new(
        args[0],
        parse_arg(args[1], "grade")?,
        parse_arg(args[2], "age")?,
        args[3],
        parse_arg(args[4], "fee")?,
    ))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 5, ADD_USAGE)?;
    let student = context.manager.add_student(details(args)?)?;
    output::success(format!(
        "Student `{}` enrolled with id {}.",
        student.name, student.id
    ));
    Ok(())
}

fn cmd_update(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 6, UPDATE_USAGE)?;
    let id: RecordId = parse_arg(args[0], "student id")?;
    let student = context.manager.update_student(id, details(&args[1..])?)?;
    output::success(format!(
        "Student {} updated; status {}.",
        student.id,
        student.fee_status()
    ));
    Ok(())
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !(2..=3).contains(&args.len()) {
        return Err(usage_error(PAY_USAGE));
    }
    let id: RecordId = parse_arg(args[0], "student id")?;
    let amount: f64 = parse_arg(args[1], "amount")?;
    let method = match args.get(2) {
        Some(raw) => raw.parse::<PaymentMethod>()?,
        None => PaymentMethod::default(),
    };
    let student = context.manager.record_fee_payment(id, amount, method)?;
    output::success(format!(
        "Payment of {} recorded for {}. Balance {} ({}).",
        context.money(amount),
        student.name,
        context.money(student.balance()),
        student.fee_status()
    ));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "delete-student ID")?;
    let id: RecordId = parse_arg(args[0], "student id")?;
    let removed = context.manager.delete_student(id)?;
    output::success(format!("Deleted student {}.", removed.display_label()));
    Ok(())
}
