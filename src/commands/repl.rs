use clap::Args;
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::cli_util::print_engine_error;
use crate::{Engine, Program};

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct ReplArgs {
    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: ReplArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    // Install SIGINT (ctrl+c) handler to flush and exit(0) immediately
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(0);
    }) {
        eprintln!("{program}: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
        return 1;
    }

    // Banner and prompt only when someone is actually looking at a terminal
    let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();
    if interactive {
        eprintln!("Brainfog REPL");
        eprintln!("Enter a line of Brainfuck to run it. Press ctrl+c or ctrl+d to exit");
        let _ = io::stderr().flush();
    }

    if let Err(e) = repl_loop(interactive) {
        eprintln!("{program}: REPL error: {e}");
        let _ = io::stderr().flush();
        return 1;
    }
    0
}

fn repl_loop(interactive: bool) -> io::Result<()> {
    let stdin = io::stdin();

    loop {
        if interactive {
            eprint!("bfog> ");
            io::stderr().flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }

        let ops = Program::load(line.as_bytes());
        if ops.is_empty() {
            continue;
        }

        execute_submission(ops);

        // Test hook: exit after a single execution to allow integration testing
        if env::var("BRAINFOG_REPL_ONCE").ok().as_deref() == Some("1") {
            return Ok(());
        }
    }
}

/// Executes a single submission on a fresh engine.
/// - Program output goes to stdout.
/// - Errors are printed concisely to stderr.
/// - A newline is always written to stdout after execution (success or error)
///   so that the prompt begins at column 0 on the next iteration.
///
/// The REPL has no byte source for ',': the input sender is dropped up
/// front, so an input instruction reports an input-channel error instead of
/// hanging the session.
fn execute_submission(ops: Program) {
    let ops_text = ops.to_string();
    let (engine, input) = Engine::spawn(ops);
    drop(input);

    let mut stdout = io::stdout().lock();
    for byte in engine.output.iter() {
        let _ = stdout.write_all(&[byte]);
    }
    let _ = stdout.flush();
    drop(stdout);

    if let Err(err) = engine.join() {
        print_engine_error(None, &ops_text, &err);
        let _ = io::stderr().flush();
    }
    println!();
    let _ = io::stdout().flush();
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} repl   # Start a Brainfuck REPL (read-eval-print loop)

Options:
  --help, -h    Show this help

Description:
  Starts a REPL where you can enter Brainfuck code and execute it live,
  one line at a time.

Notes:
    - Non-Brainfuck characters are ignored; only valid instructions execute.
    - Each submission starts with a fresh memory tape and pointer.
    - The REPL has no input source for `,`; it reports an input-channel error.
    - Ctrl+d exits the REPL at the prompt; ctrl+c exits immediately.
    - A newline is printed after each execution for readability.
    - The REPL exits after a single execution if the environment variable
      `BRAINFOG_REPL_ONCE` is set to `1`.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
