use crate::cli::commands::{
    parse_arg, salaries::render_obligations, students::render_fee_rows,
    students::render_students, teachers::render_teachers, usage_error, CommandDefinition,
};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::currency::{format_amount, format_date};
use crate::domain::{LedgerEntry, RecordId};

const HISTORY_USAGE: &str = "history student|teacher ID";
const SEARCH_USAGE: &str = "search students|teachers|salaries|fees QUERY";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("dashboard", "Headline totals", "dashboard", cmd_dashboard),
        CommandDefinition::new(
            "analytics",
            "Collection rate and payroll overview",
            "analytics",
            cmd_analytics,
        ),
        CommandDefinition::new(
            "activity",
            "Most recent history entries",
            "activity [N]",
            cmd_activity,
        ),
        CommandDefinition::new(
            "history",
            "Full history of one student or teacher",
            HISTORY_USAGE,
            cmd_history,
        ),
        CommandDefinition::new("search", "Filter a table by text", SEARCH_USAGE, cmd_search),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.manager.dashboard();
    output::section(format!(
        "Dashboard ({})",
        context.manager.current_month().label()
    ));
    let rows = [
        ("Students", totals.student_count.to_string()),
        ("Teachers", totals.teacher_count.to_string()),
        ("Fees collected", context.money(totals.total_fees_collected)),
        ("Outstanding fees", context.money(totals.outstanding_fees)),
        (
            "Salaries paid this month",
            context.money(totals.total_salaries_paid_this_month),
        ),
    ];
    for (label, value) in rows {
        output::info(format!("{label:<24}: {value}"));
    }
    Ok(())
}

fn cmd_analytics(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let overview = context.manager.analytics();
    output::section("Analytics");
    output::info(format!(
        "Students {} / Teachers {}",
        overview.student_count, overview.teacher_count
    ));
    output::info(format!(
        "Fees expected   : {}",
        context.money(overview.total_fees_expected)
    ));
    output::info(format!(
        "Fees collected  : {}",
        context.money(overview.total_fees_collected)
    ));
    output::info(format!(
        "Outstanding     : {}",
        context.money(overview.outstanding_fees)
    ));
    output::info(format!("Collection rate : {:.1}%", overview.collection_rate));
    output::info(format!(
        "Monthly payroll : {}",
        context.money(overview.monthly_payroll)
    ));
    Ok(())
}

fn cmd_activity(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let limit = match args {
        [] => None,
        [raw] => Some(parse_arg::<usize>(raw, "limit")?),
        _ => return Err(usage_error("activity [N]")),
    };
    let items = context.manager.recent_activity(limit);
    output::section("Recent activity");
    if items.is_empty() {
        output::info("Nothing recorded yet.");
    }
    for item in &items {
        let amount = if item.action.is_monetary() {
            format!("  {}", context.money(item.amount))
        } else {
            String::new()
        };
        output::info(format!("  {}  {}{}", format_date(item.date), item, amount));
    }
    Ok(())
}

fn render_entries(entries: &[LedgerEntry]) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Action"),
        TableColumn::right("Amount"),
        TableColumn::left("Details"),
    ]);
    for entry in entries {
        let details = entry
            .month_label()
            .or_else(|| entry.method.map(|method| method.to_string()))
            .unwrap_or_default();
        table.push(vec![
            format_date(entry.date),
            entry.action.to_string(),
            format_amount(entry.amount),
            details,
        ]);
    }
    table.render()
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, raw_id] = args else {
        return Err(usage_error(HISTORY_USAGE));
    };
    let id: RecordId = parse_arg(raw_id, "id")?;
    match kind.to_lowercase().as_str() {
        "student" => {
            let history = context.manager.student_history(id)?;
            output::section(format!("History: {}", history.name));
            output::info(render_entries(&history.entries));
            output::info(format!(
                "Total fee {}  Paid {}  Balance {}  Status {}",
                context.money(history.total_fee),
                context.money(history.paid_amount),
                context.money(history.balance),
                history.fee_status
            ));
        }
        "teacher" => {
            let history = context.manager.teacher_history(id)?;
            output::section(format!("History: {} ({})", history.name, history.subject));
            output::info(render_entries(&history.entries));
            let summary = history.summary;
            output::info(format!(
                "Monthly salary {}  Total paid {}  Payments {}  Average {}",
                context.money(summary.monthly_salary),
                context.money(summary.total_paid),
                summary.payment_count,
                context.money(summary.average_payment)
            ));
        }
        _ => return Err(usage_error(HISTORY_USAGE)),
    }
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((kind, terms)) = args.split_first() else {
        return Err(usage_error(SEARCH_USAGE));
    };
    let query = terms.join(" ");
    let manager = &context.manager;
    let (rendered, count) = match kind.to_lowercase().as_str() {
        "students" => {
            let found = manager.search_students(&query);
            (render_students(&found), found.len())
        }
        "teachers" => {
            let found = manager.search_teachers(&query);
            (render_teachers(&found), found.len())
        }
        "salaries" => {
            let found = manager.search_salaries(&query);
            (render_obligations(&found), found.len())
        }
        "fees" => {
            let found = manager.search_fees(&query);
            (render_fee_rows(&found), found.len())
        }
        _ => return Err(usage_error(SEARCH_USAGE)),
    };
    output::section(format!("Search {} for `{}`", kind, query));
    if count == 0 {
        output::info("No matches.");
    } else {
        output::info(rendered);
        output::info(format!("{count} match(es)."));
    }
    Ok(())
}
