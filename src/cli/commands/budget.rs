use crate::cli::args::{FlagSpec, Flags};
use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::ServiceError;
use crate::errors::TrackerError;

const BUDGET: FlagSpec = FlagSpec::new("budget", 'b');
const MONTH: FlagSpec = FlagSpec::new("month", 'm');
const YEAR: FlagSpec = FlagSpec::new("year", 'y');

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-budget",
            "Set the budget of a month, replacing any previous one",
            "add-budget --budget <n> --month <1-12> [--year <yyyy>]",
            cmd_add_budget,
        ),
        CommandEntry::new(
            "get-budget",
            "Show the budget of a month (defaults to this month)",
            "get-budget [--month <1-12>] [--year <yyyy>]",
            cmd_get_budget,
        ),
        CommandEntry::new(
            "budgets",
            "List the budgets of a year (defaults to this year)",
            "budgets [--year <yyyy>]",
            cmd_budgets,
        ),
    ]
}

fn cmd_add_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = Flags::parse(args, &[BUDGET, MONTH, YEAR])?;
    let amount: f64 = flags.require_parsed("budget")?;
    let month: u32 = flags.require_parsed("month")?;
    let year: Option<i32> = flags.parsed("year")?;

    let budget = context.tracker.budgets().set(amount, month, year)?;
    io::print_success(format!(
        "The new budget for {} is: {}",
        budget.period_label(),
        context.money(budget.amount)
    ));
    Ok(())
}

/// Prints the budget, or a plain notice when the month has none.
fn cmd_get_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = Flags::parse(args, &[MONTH, YEAR])?;
    match context
        .tracker
        .budgets()
        .get(flags.parsed("month")?, flags.parsed("year")?)
    {
        Ok(budget) => io::print_info(format!(
            "Current budget for {} is: {}",
            budget.period_label(),
            context.money(budget.amount)
        )),
        Err(ServiceError::Core(missing @ TrackerError::BudgetNotFound { .. })) => {
            io::print_warning(missing)
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn cmd_budgets(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = Flags::parse(args, &[YEAR])?;
    let year: Option<i32> = flags.parsed("year")?;
    let budgets = context.tracker.budgets().for_year(year)?;
    if budgets.is_empty() {
        io::print_info("No budgets found.");
        return Ok(());
    }
    for budget in budgets {
        io::print_info(format!(
            "  {}  {}",
            budget.period_label(),
            context.money(budget.amount)
        ));
    }
    Ok(())
}
