use crate::cli::commands::{expect_args, usage_error, CommandDefinition};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::currency::{format_amount, format_date, format_optional_date};
use crate::domain::{MonthKey, ObligationKey, SalaryObligation};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "salaries",
            "Salary obligations, optionally for one month",
            "salaries [YYYY-MM]",
            cmd_list,
        ),
        CommandDefinition::new(
            "pay-salary",
            "Pay one pending salary by key",
            "pay-salary TEACHER_ID-YYYY-MM",
            cmd_pay,
        ),
        CommandDefinition::new("pay-all", "Pay every pending salary", "pay-all", cmd_pay_all),
    ]
}

pub(crate) fn render_obligations(obligations: &[&SalaryObligation]) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Key"),
        TableColumn::left("Teacher"),
        TableColumn::left("Subject"),
        TableColumn::left("Month"),
        TableColumn::right("Amount"),
        TableColumn::left("Status"),
        TableColumn::left("Paid on"),
    ]);
    for obligation in obligations {
        table.push(vec![
            obligation.key.to_string(),
            obligation.teacher_name.clone(),
            obligation.subject.clone(),
            obligation.month_label(),
            format_amount(obligation.amount),
            obligation.status.to_string(),
            format_optional_date(obligation.payment_date),
        ]);
    }
    table.render()
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let month = match args {
        [] => None,
        [raw] => Some(raw.parse::<MonthKey>()?),
        _ => return Err(usage_error("salaries [YYYY-MM]")),
    };
    let obligations = context.manager.salaries_for_month(month);
    output::section(match month {
        Some(month) => format!("Salaries for {}", month.label()),
        None => "Salary management".to_string(),
    });
    if obligations.is_empty() {
        output::info("No salary records.");
        return Ok(());
    }
    output::info(render_obligations(&obligations));

    let (paid, pending): (Vec<&SalaryObligation>, Vec<&SalaryObligation>) =
        obligations.into_iter().partition(|obligation| !obligation.is_pending());
    output::info(format!(
        "Paid: {} ({})  Pending: {} ({})",
        paid.len(),
        context.money(paid.iter().map(|o| o.amount).sum()),
        pending.len(),
        context.money(pending.iter().map(|o| o.amount).sum()),
    ));
    Ok(())
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "pay-salary TEACHER_ID-YYYY-MM")?;
    let key: ObligationKey = args[0].parse()?;
    let obligation = context.manager.pay_salary(key)?;
    output::success(format!(
        "Salary of {} paid to {} for {}.",
        context.money(obligation.amount),
        obligation.teacher_name,
        obligation.month_label()
    ));
    Ok(())
}

fn cmd_pay_all(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let batch = context.manager.pay_all_pending();
    if batch.count == 0 {
        output::info("No pending salaries.");
    } else {
        output::success(format!(
            "Paid {} pending salaries totalling {} on {}.",
            batch.count,
            context.money(batch.amount_paid),
            format_date(batch.payment_date)
        ));
    }
    Ok(())
}
