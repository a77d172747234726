// PNPL: Prime Number Programming Language interpreter

mod cli;

use std::fs;
use std::io;
use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use cli::Cli;
use pnpl::codec::{integer_to_source, parse_integer, read_digits, source_to_integer};
use pnpl::interpreter::engine::Interpreter;
use pnpl::interpreter::errors::PnplError;
use pnpl::ui::{App, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.repl {
        return run_session(cli.memory);
    }

    cli.init_logging();

    let result = if let Some(program) = &cli.eval {
        parse_integer(program)
            .and_then(|n| Interpreter::new(&n, cli.memory))
            .and_then(|machine| run_machine(machine, cli.stdin))
    } else if let Some(path) = &cli.run {
        info!(path = %path.display(), "loading program file");
        Interpreter::from_file(path, cli.memory).and_then(|machine| run_machine(machine, cli.stdin))
    } else if let Some(paths) = &cli.bf2pnpl {
        convert(&paths[0], &paths[1], |text| Ok(source_to_integer(text).to_string()))
    } else if let Some(paths) = &cli.pnpl2bf {
        convert(&paths[0], &paths[1], |text| integer_to_source(&read_digits(text)?))
    } else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    Ok(())
}

/// Run a loaded machine against the process's standard streams
fn run_machine(mut machine: Interpreter, honor_input: bool) -> Result<(), PnplError> {
    info!(
        instructions = machine.program().len(),
        memory = machine.memory_size(),
        "running program"
    );
    let mut stdout = io::stdout().lock();
    if honor_input {
        let mut stdin = io::stdin().lock();
        machine.run_with_input(&mut stdout, &mut stdin)
    } else {
        machine.run(&mut stdout)
    }
}

/// Read `input`, transform its text, and write the result to `output`
fn convert(
    input: &Path,
    output: &Path,
    transform: impl FnOnce(&str) -> Result<String, PnplError>,
) -> Result<(), PnplError> {
    let text = fs::read_to_string(input).map_err(|e| PnplError::Io {
        message: format!("{}: {}", input.display(), e),
    })?;
    let converted = transform(&text)?;
    fs::write(output, converted).map_err(|e| PnplError::Io {
        message: format!("{}: {}", output.display(), e),
    })?;
    info!(from = %input.display(), to = %output.display(), "converted program");
    Ok(())
}

/// Start the interactive session in the alternate screen
fn run_session(memory_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let session = match Session::new(memory_size) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
