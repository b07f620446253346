use crate::cli::args::{FlagSpec, Flags};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::utils::build_info;

const CURRENCY: FlagSpec = FlagSpec::new("currency", 'c');

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "status",
            "Show data file locations and record counts",
            "status",
            cmd_status,
        ),
        CommandEntry::new(
            "config",
            "Show settings or change the currency symbol",
            "config [--currency <symbol>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let expenses = context.tracker.expense_repository();
    let budgets = context.tracker.budget_repository();
    output_section("Status");
    io::print_info(format!("  Data directory: {}", context.tracker.base().display()));
    io::print_info(format!(
        "  Expenses      : {} ({} records, last id {})",
        expenses.location(),
        expenses.count()?,
        expenses.high_water_mark()
    ));
    io::print_info(format!(
        "  Budgets       : {} ({} records)",
        budgets.location(),
        budgets.count()?
    ));
    io::print_info(format!("  Currency      : {}", context.config.currency_symbol));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = Flags::parse(args, &[CURRENCY])?;
    if let Some(symbol) = flags.get("currency") {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(CommandError::InvalidArguments(
                "currency symbol must not be empty".into(),
            ));
        }
        let mut updated = context.config.clone();
        updated.currency_symbol = symbol.to_string();
        context.config_manager.save(&updated)?;
        context.config = updated;
        io::print_success(format!("Currency symbol set to {}", symbol));
        return Ok(());
    }

    output_section("Settings");
    io::print_info(format!(
        "  Settings file : {}",
        context.config_manager.path().display()
    ));
    io::print_info(format!("  Expense file  : {}", context.config.expense_file));
    io::print_info(format!("  Budget file   : {}", context.config.budget_file));
    io::print_info(format!("  Currency      : {}", context.config.currency_symbol));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Expense Tracker {}", meta.version));
    io::print_info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    io::print_info(format!("  Built at     : {}", meta.timestamp));
    io::print_info(format!("  Target       : {}", meta.target));
    io::print_info(format!("  Profile      : {}", meta.profile));
    io::print_info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

#[cfg(test)]
mod tests {
    use crate::cli::core::{CommandError, LoopControl};
    use crate::cli::shell_context::test_support::{context_on, run};
    use crate::config::ConfigManager;

    #[test]
    fn informational_commands_succeed() {
        let (_dir, mut context) = context_on((2025, 6, 20));
        run(&mut context, "add -d Lunch -a 12 -c food").unwrap();
        for line in ["status", "config", "version", "help", "help add", "help nosuch"] {
            assert_eq!(run(&mut context, line).unwrap(), LoopControl::Continue, "{line}");
        }
    }

    #[test]
    fn config_currency_is_saved_and_used() {
        let (dir, mut context) = context_on((2025, 6, 20));
        run(&mut context, "config --currency €").unwrap();
        assert_eq!(context.money(3.0), "€3.00");

        let reloaded = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(reloaded.currency_symbol, "€");
        assert_eq!(reloaded.expense_file, "expense.json");

        let err = run(&mut context, "config -c ' '").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert_eq!(context.money(3.0), "€3.00");
    }
}
