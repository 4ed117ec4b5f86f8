//! A tiny channel-driven Brainfuck interpreter library.
//!
//! This crate interprets the canonical eight-instruction Brainfuck language
//! on a fixed memory tape of 30,000 cells with a single data pointer. The
//! interpreter runs on its own thread, started at construction time, and the
//! caller talks to the running program exclusively through two rendezvous
//! byte channels: one feeding the `,` instruction, one carrying the bytes
//! emitted by `.`.
//!
//! Features and behaviors:
//! - Memory tape of 30,000 cells, initialized to 0.
//! - Cell arithmetic wraps modulo 256; `+` and `-` never fail.
//! - Strict pointer bounds: moving left from cell 0 or right past the last
//!   cell halts the program with an error.
//! - `.` blocks the program until the emitted byte is received; `,` blocks
//!   until a byte is supplied. Output arrives in strict program order.
//! - Any non-Brainfuck byte in the source is treated as a comment and
//!   silently dropped when the program is loaded.
//! - Bracket balance is checked lazily: a `[` without a matching `]` is an
//!   error when the loop is entered, and a stray `]` is an error when normal
//!   execution reaches it.
//!
//! Quick start:
//!
//! ```no_run
//! use brainfog::{Engine, Program};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let (engine, _input) = Engine::spawn(Program::load(code.as_bytes()));
//! for byte in engine.output.iter() {
//!     print!("{}", byte as char);
//! }
//! engine.join().expect("program should run");
//! ```

pub mod cli_util;
pub mod commands;
mod engine;
mod error;
mod program;

pub use engine::{Engine, TAPE_SIZE};
pub use error::EngineError;
pub use program::Program;
