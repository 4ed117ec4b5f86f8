use std::io::{self, Write};

use crate::EngineError;

/// Pretty-print a structured [`EngineError`] with caret positioning.
/// If `program` is `Some("brainfog")`, messages are prefixed with
/// "brainfog: ..." for CLI run mode.
pub fn print_engine_error(program: Option<&str>, ops: &str, err: &EngineError) {
    let msg = match program {
        Some(p) => format!("{p}: {err}"),
        None => err.to_string(),
    };
    print_error_with_context(&msg, ops, err.ip());
}

/// Print a message followed by a short window of the instruction text with
/// a caret under the failing position. `ops` is the filtered instruction
/// sequence, which is pure ASCII, so positions map one-to-one onto bytes.
pub fn print_error_with_context(msg: &str, ops: &str, pos: usize) {
    eprintln!("{msg}");

    // Show a short window around the position for context
    const WINDOW: usize = 32;

    let start = pos.saturating_sub(WINDOW);
    let end = (pos + WINDOW + 1).min(ops.len());

    if start < end {
        eprintln!("  {}", &ops[start..end]);

        // Caret under the exact position
        let mut underline = String::new();
        for _ in 0..pos.saturating_sub(start) {
            underline.push(' ');
        }
        underline.push('^');
        eprintln!("  {underline}");
    }
    let _ = io::stderr().flush();
}
