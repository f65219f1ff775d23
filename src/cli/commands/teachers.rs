use crate::cli::commands::{expect_args, parse_arg, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::currency::format_amount;
use crate::domain::{Displayable, RecordId, TeacherDetails, TeacherRecord};

const ADD_USAGE: &str = "add-teacher NAME SUBJECT YEARS CONTACT SALARY";
const UPDATE_USAGE: &str = "update-teacher ID NAME SUBJECT YEARS CONTACT SALARY";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("teachers", "List teaching staff", "teachers", cmd_list),
        CommandDefinition::new("staff", "Staff roster with payroll", "staff", cmd_staff),
        CommandDefinition::new("add-teacher", "Hire a teacher", ADD_USAGE, cmd_add),
        CommandDefinition::new(
            "update-teacher",
            "Edit a teacher's details",
            UPDATE_USAGE,
            cmd_update,
        ),
        CommandDefinition::new(
            "delete-teacher",
            "Remove a teacher and their salary records",
            "delete-teacher ID",
            cmd_delete,
        ),
    ]
}

pub(crate) fn render_teachers(teachers: &[&TeacherRecord]) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Name"),
        TableColumn::left("Subject"),
        TableColumn::right("Years"),
        TableColumn::left("Contact"),
        TableColumn::right("Monthly salary"),
    ]);
    for teacher in teachers {
        table.push(vec![
            teacher.id.to_string(),
            teacher.name.clone(),
            teacher.subject.clone(),
            teacher.experience.to_string(),
            teacher.contact.clone(),
            format_amount(teacher.monthly_salary),
        ]);
    }
    table.render()
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let teachers = context.manager.teachers();
    output::section("Teachers");
    if teachers.is_empty() {
        output::info("No teachers on staff.");
    } else {
        output::info(render_teachers(&teachers));
    }
    Ok(())
}

fn cmd_staff(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = context.manager.staff_report();
    output::section("Staff report");
    for row in &report.rows {
        output::info(format!(
            "  {:<24} {:<20} {:>3} yrs  {}",
            row.name,
            row.subject,
            row.experience,
            context.money(row.monthly_salary)
        ));
    }
    output::info(format!(
        "Total monthly payroll: {}",
        context.money(report.total_monthly_payroll)
    ));
    Ok(())
}

fn details(args: &[&str]) -> Result<TeacherDetails, CommandError> {
    Ok(TeacherDetails::new(
        args[0],
        args[1],
        parse_arg(args[2], "years of experience")?,
        args[3],
        parse_arg(args[4], "salary")?,
    ))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 5, ADD_USAGE)?;
    let teacher = context.manager.add_teacher(details(args)?)?;
    output::success(format!(
        "Teacher `{}` hired with id {}.",
        teacher.name, teacher.id
    ));
    Ok(())
}

fn cmd_update(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 6, UPDATE_USAGE)?;
    let id: RecordId = parse_arg(args[0], "teacher id")?;
    let teacher = context.manager.update_teacher(id, details(&args[1..])?)?;
    output::success(format!("Teacher {} updated.", teacher.id));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "delete-teacher ID")?;
    let id: RecordId = parse_arg(args[0], "teacher id")?;
    let removed = context.manager.delete_teacher(id)?;
    output::success(format!("Deleted teacher {}.", removed.display_label()));
    Ok(())
}
