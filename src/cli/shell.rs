use std::{
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, LoopControl};
use crate::cli::output::info as output_info;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::utils::build_info;

pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

/// Entry point of the binary. Non-empty `args` run as a single command; otherwise
/// commands come from stdin (`EXPENSE_TRACKER_CLI_SCRIPT` set) or an interactive prompt.
pub fn run_cli(args: Vec<String>) -> Result<(), CliError> {
    let mode = if !args.is_empty() {
        CliMode::OneShot
    } else if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::OneShot => run_one_shot(&mut context, &args),
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_one_shot(context: &mut ShellContext, args: &[String]) -> Result<(), CliError> {
    match context.process_tokens(args) {
        Ok(_) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_names());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
    output_info(format!(
        "{}. Type `help` to see available commands.",
        build_info::current().short_label()
    ));

    while context.running {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                if handle_line(context, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if handle_line(context, &line) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Tokenizes and runs one line. Failures are reported and the shell keeps going.
fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            crate::cli::io::print_warning(err);
            return LoopControl::Continue;
        }
    };

    match context.process_tokens(&tokens) {
        Ok(control) => control,
        Err(err) => {
            context.report_error(err);
            LoopControl::Continue
        }
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let trimmed = prefix.trim_start();
        if let Some(space_idx) = trimmed.find(char::is_whitespace) {
            let leading = prefix.len().saturating_sub(trimmed.len());
            if pos > leading + space_idx {
                return Ok((start, Vec::new()));
            }
        }

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_handles_quotes() {
        let tokens = parse_command_line("add -d 'Dinner out' -a 30 -c food").unwrap();
        assert_eq!(tokens, vec!["add", "-d", "Dinner out", "-a", "30", "-c", "food"]);
        assert!(parse_command_line("add -d 'unterminated").is_err());
    }

    #[test]
    fn completion_matches_command_prefixes() {
        let helper = CommandHelper::new(vec!["add", "add-budget", "list"]);
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (start, candidates) = helper.complete("ad", 2, &ctx).unwrap();
        assert_eq!(start, 0);
        let names: Vec<_> = candidates.into_iter().map(|pair| pair.replacement).collect();
        assert_eq!(names, vec!["add", "add-budget"]);

        let (_, candidates) = helper.complete("add -d", 6, &ctx).unwrap();
        assert!(candidates.is_empty());
    }
}
