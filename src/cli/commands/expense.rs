use crate::cli::args::{FlagSpec, Flags};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::expense_table;
use crate::core::services::{ExpenseFilter, NewExpense};
use crate::domain::Identifiable;

const DESCRIPTION: FlagSpec = FlagSpec::new("description", 'd');
const AMOUNT: FlagSpec = FlagSpec::new("amount", 'a');
const CATEGORY: FlagSpec = FlagSpec::new("category", 'c');
const MONTH: FlagSpec = FlagSpec::new("month", 'm');
const ID: FlagSpec = FlagSpec::new("id", 'i');

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a new expense dated today",
            "add --description <text> --amount <n> --category <name>",
            cmd_add,
        ),
        CommandEntry::new(
            "list",
            "List expenses, optionally by month and category",
            "list [--month <1-12>] [--category <name>]",
            cmd_list,
        ),
        CommandEntry::new("delete", "Delete an expense by id", "delete --id <n>", cmd_delete),
        CommandEntry::new(
            "summary",
            "Total spending, optionally by month and category",
            "summary [--month <1-12>] [--category <name>]",
            cmd_summary,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = Flags::parse(args, &[DESCRIPTION, AMOUNT, CATEGORY])?;
    let input = NewExpense {
        description: flags.require("description")?,
        amount: flags.require_parsed("amount")?,
        category: flags.require("category")?,
    };
    let added = context.tracker.expenses().add(input)?;

    let mut message = format!("Expense added successfully (ID: {})", added.expense.id());
    match added.overspent() {
        Some(over) => {
            message.push_str(&format!(" - Warning: Budget exceeded by {}", context.money(over)));
            io::print_warning(message);
        }
        None => io::print_success(message),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = parse_filter(args)?;
    let expenses = context.tracker.expenses().list(filter)?;
    if expenses.is_empty() {
        io::print_info("No expenses found.");
        return Ok(());
    }
    let table = expense_table(&expenses, |amount| context.money(amount));
    io::print_info(table.render());
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = Flags::parse(args, &[ID])?;
    let id: u32 = flags.require_parsed("id")?;
    if context.tracker.expenses().delete(id)? {
        io::print_success("Expense deleted successfully");
    } else {
        io::print_warning(format!("No expense found with ID: {}", id));
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = parse_filter(args)?;
    let total = context.money(context.tracker.expenses().summary(filter)?);
    let month = filter.month.map(month_name);
    let message = match (filter.category, month) {
        (None, None) => format!("Total expenses: {}", total),
        (None, Some(month)) => format!("Total expenses for {}: {}", month, total),
        (Some(category), None) => format!("Total expenses for {}: {}", category, total),
        (Some(category), Some(month)) => {
            format!("Total expenses for {} in {}: {}", category, month, total)
        }
    };
    io::print_info(message);
    Ok(())
}

fn parse_filter(args: &[&str]) -> Result<ExpenseFilter, CommandError> {
    let flags = Flags::parse(args, &[MONTH, CATEGORY])?;
    Ok(ExpenseFilter::parse(
        flags.parsed("month")?,
        flags.get("category"),
    )?)
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .map(|name| name.to_string())
        .unwrap_or_else(|| month.to_string())
}
