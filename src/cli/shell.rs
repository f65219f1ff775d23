use std::io::{self, BufRead};

use shell_words::split;

use crate::cli::core::{CliError, CommandError, LoopControl, ShellContext};
use crate::cli::output;

/// Runs commands read line by line from stdin until `exit` or end of input.
pub fn run_cli(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    run_script(context, stdin.lock())
}

pub fn run_script<R: BufRead>(context: &mut ShellContext, reader: R) -> Result<(), CliError> {
    for line in reader.lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };

    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    if raw.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::{FixedClock, SchoolManager};
    use chrono::NaiveDate;

    fn context() -> ShellContext {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
        ShellContext::new(SchoolManager::new(Config::default(), Box::new(clock)))
    }

    #[test]
    fn script_applies_commands_and_stops_at_exit() {
        let mut context = context();
        let script = "add-student \"Ama Mensah\" 4 9 0200000000 1200\n\
                      pay-fee 1 200 cash\n\
                      exit\n\
                      add-student Late 1 6 0200000001 100\n";
        run_script(&mut context, script.as_bytes()).unwrap();

        let school = context.manager.school();
        assert_eq!(school.students.len(), 1);
        assert_eq!(school.students[0].name, "Ama Mensah");
        assert_eq!(school.students[0].paid_amount(), 200.0);
        assert!(!context.running);
    }

    #[test]
    fn failed_command_does_not_stop_the_loop() {
        let mut context = context();
        let script = "pay-fee 9 100\nbogus\nadd-teacher Kojo Music 3 0240000000 2000\n";
        run_script(&mut context, script.as_bytes()).unwrap();
        assert_eq!(context.manager.school().teachers.len(), 1);
        assert!(context.running);
    }

    #[test]
    fn blank_comment_and_unbalanced_lines_are_skipped() {
        let mut context = context();
        for line in ["", "   ", "# note", "add-student \"unterminated"] {
            assert_eq!(
                handle_line(&mut context, line).unwrap(),
                LoopControl::Continue
            );
        }
        assert!(context.manager.school().students.is_empty());
    }
}
