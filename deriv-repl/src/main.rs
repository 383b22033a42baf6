use deriv_compute::diff;
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};

/// Differentiates the given expression, printing the derivative to stdout, or the error report
/// to stderr.
///
/// Returns `true` if the expression was differentiated successfully.
fn read_diff(input: &str) -> bool {
    match diff(input) {
        Ok(derivative) => {
            println!("{}", derivative);
            true
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                eprintln!("{}", io_err);
            }
            false
        },
    }
}

/// Reads one line from the editor and differentiates it.
fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(());
    }

    rl.add_history_entry(&input)?;

    read_diff(&input);
    Ok(())
}

/// Runs the interactive prompt until the user exits with Ctrl-C or Ctrl-D.
fn repl() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match process_line(&mut rl) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let mut args = std::env::args();
    args.next();

    let success = if let Some(input) = args.next() {
        // differentiate the argument
        read_diff(&input)
    } else if !io::stdin().is_terminal() {
        // differentiate each line of stdin
        let mut success = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    success = false;
                    break;
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            success &= read_diff(&line);
        }
        success
    } else {
        info!("starting interactive mode");
        match repl() {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{}", err);
                false
            },
        }
    };

    if !success {
        std::process::exit(1);
    }
}
