use clap::Args;
use std::io::{self, Read, Write};
use std::{fs, thread};

use crate::cli_util::print_engine_error;
use crate::{Engine, Program};

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct RunArgs {
    /// Read Brainfuck code from PATH instead of positional "<code>"
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Concatenated Brainfuck code parts
    #[arg(value_name = "code", trailing_var_arg = true)]
    pub code: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: RunArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let RunArgs { file, code, .. } = args;

    if file.is_none() && code.is_empty() {
        usage_and_exit(program, 2);
    }

    if file.is_some() && !code.is_empty() {
        eprintln!("{program}: cannot use positional code together with --file");
        usage_and_exit(program, 2);
    }

    // Source is raw bytes; the loader drops everything outside the
    // instruction alphabet, so any encoding is acceptable.
    let source: Vec<u8> = if let Some(path) = file {
        match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("{program}: failed to read code file: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        }
    } else {
        code.join("").into_bytes()
    };

    let ops = Program::load(&source);
    // Error positions index the filtered sequence, so caret context is
    // drawn against this rendering rather than the raw source.
    let ops_text = ops.to_string();

    let (engine, input) = Engine::spawn(ops);

    // Feed stdin into the input channel, one byte per ','. The send blocks
    // until the program actually reads, so nothing is consumed ahead of it.
    thread::spawn(move || {
        let mut stdin = io::stdin().lock();
        let mut buf = [0u8; 1];
        loop {
            match stdin.read(&mut buf) {
                Ok(n) if n > 0 => {
                    if input.send(buf[0]).is_err() {
                        return;
                    }
                }
                _ => break,
            }
        }
        // EOF: keep supplying zero bytes so ',' never waits on a closed
        // stdin. Ends once the engine hangs up.
        while input.send(0).is_ok() {}
    });

    let mut stdout = io::stdout().lock();
    for byte in engine.output.iter() {
        let _ = stdout.write_all(&[byte]);
        let _ = stdout.flush();
    }
    drop(stdout);

    match engine.join() {
        Ok(()) => {
            // For readability, ensure output ends with a newline
            println!();
            let _ = io::stdout().flush();
            0
        }
        Err(err) => {
            print_engine_error(Some(program), &ops_text, &err);
            let _ = io::stderr().flush();
            1
        }
    }
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} run "<code>"         # Run Brainfuck code (args are concatenated)
  {0} run --file <PATH>    # Run Brainfuck code loaded from file

Options:
  --file, -f <PATH>  Read Brainfuck code from PATH instead of positional "<code>"
  --help, -h    Show this help

Notes:
- Input (`,`) reads a single byte from stdin; on EOF it reads a 0 byte.
- Characters outside of Brainfuck's ><+-.,[] are ignored as comments.

Examples:
- Load Brainfuck code from a file:
    {0} run --file ./program.bf
- Read bytes from a file as stdin (`,` will consume file input):
    {0} run ",[.,]" < input.txt
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
