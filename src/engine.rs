use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::error::EngineError;
use crate::program::Program;

/// Number of cells on the memory tape.
pub const TAPE_SIZE: usize = 30_000;

/// Handle to a running interpreter.
///
/// [`Engine::spawn`] starts execution on a background thread immediately;
/// the caller interacts with the program only through the returned input
/// sender and the [`output`](Engine::output) receiver. Both channels are
/// rendezvous channels: `.` does not proceed until the emitted byte is
/// received, and `,` does not proceed until a byte is supplied.
pub struct Engine {
    /// Receiving end of the output channel. Yields bytes in strict program
    /// order and disconnects exactly once, when the engine terminates.
    pub output: Receiver<u8>,
    handle: JoinHandle<Result<(), EngineError>>,
}

impl Engine {
    /// Spawn the engine thread for `program` and return the handle together
    /// with the sender feeding the `,` instruction.
    ///
    /// Dropping the sender closes the input channel; a `,` executed after
    /// that fails with [`EngineError::InputClosed`] rather than blocking
    /// forever. Dropping the whole `Engine` likewise disconnects the output
    /// channel, so an abandoned program terminates at its next `.` instead
    /// of leaking a blocked thread.
    pub fn spawn(program: Program) -> (Self, SyncSender<u8>) {
        let (input_tx, input_rx) = mpsc::sync_channel(0);
        let (output_tx, output_rx) = mpsc::sync_channel(0);

        let handle = thread::spawn(move || {
            let mut machine = Machine::new(program, input_rx, output_tx);
            machine.run()
        });

        (
            Self {
                output: output_rx,
                handle,
            },
            input_tx,
        )
    }

    /// Wait for the engine to terminate and return its result.
    ///
    /// The output receiver is dropped first, so joining without draining
    /// the remaining output unblocks a program stuck at `.` (which then
    /// terminates with [`EngineError::OutputClosed`]). A program blocked at
    /// `,` keeps waiting until its input sender is dropped.
    pub fn join(self) -> Result<(), EngineError> {
        drop(self.output);
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// The interpreter proper: program, pointers and tape, confined to the
/// engine thread. The two channels are its only externally visible state,
/// so no locking is needed anywhere.
struct Machine {
    program: Program,
    ip: usize,
    cp: usize,
    tape: Vec<u8>,
    input: Receiver<u8>,
    output: SyncSender<u8>,
}

impl Machine {
    fn new(program: Program, input: Receiver<u8>, output: SyncSender<u8>) -> Self {
        Self {
            program,
            ip: 0,
            cp: 0,
            tape: vec![0; TAPE_SIZE],
            input,
            output,
        }
    }

    /// Top-level run loop: step until `ip` runs off the end of the program
    /// or an instruction fails. The output channel closes when the machine
    /// is dropped on thread exit, signaling end-of-output exactly once.
    fn run(&mut self) -> Result<(), EngineError> {
        while self.ip < self.program.len() {
            self.step()?;
        }
        Ok(())
    }

    /// Execute the instruction at `ip` and advance past it. A loop construct
    /// leaves `ip` on its closing `]` when it returns, so the advance at the
    /// bottom steps past the whole loop.
    fn step(&mut self) -> Result<(), EngineError> {
        let ip = self.ip;
        match self.program.op(ip) {
            Some(b'+') => self.tape[self.cp] = self.tape[self.cp].wrapping_add(1),
            Some(b'-') => self.tape[self.cp] = self.tape[self.cp].wrapping_sub(1),
            Some(b'<') => {
                if self.cp == 0 {
                    return Err(EngineError::CellUnderflow { ip });
                }
                self.cp -= 1;
            }
            Some(b'>') => {
                if self.cp == TAPE_SIZE - 1 {
                    return Err(EngineError::CellOverflow { ip });
                }
                self.cp += 1;
            }
            Some(b'.') => {
                self.output
                    .send(self.tape[self.cp])
                    .map_err(|_| EngineError::OutputClosed { ip })?;
            }
            Some(b',') => {
                self.tape[self.cp] = self
                    .input
                    .recv()
                    .map_err(|_| EngineError::InputClosed { ip })?;
            }
            Some(b'[') => self.run_branch()?,
            Some(b']') => return Err(EngineError::UnmatchedClose { ip }),
            // Program::load admits only the eight instruction bytes, and
            // run() never steps past the end of the program.
            _ => {}
        }
        self.ip += 1;

        Ok(())
    }

    /// Execute a complete loop construct whose `[` sits at `ip`.
    ///
    /// The matching `]` is found by a fresh forward scan on every entry, so
    /// bracket balance is only checked for loops that actually execute. A
    /// `]` the scan skipped over is still an error if normal dispatch ever
    /// reaches it.
    fn run_branch(&mut self) -> Result<(), EngineError> {
        let start = self.ip;
        if self.program.op(start) != Some(b'[') {
            return Err(EngineError::InvalidBranchStart { ip: start });
        }
        let end = self.matching_close(start)?;

        while self.ip <= end {
            if self.ip == start {
                if self.tape[self.cp] == 0 {
                    // Zero at the loop head: skip the body entirely.
                    self.ip = end;
                    break;
                }
                // Enter the body.
                self.ip += 1;
            }

            if self.ip == end {
                // Closing bracket: jump back and re-check the condition.
                self.ip = start;
            } else {
                self.step()?;
            }
        }
        // `ip` rests on the closing `]`; the caller advances past it.
        Ok(())
    }

    /// Index of the `]` matching the `[` at `start`, scanning forward and
    /// skipping nested loops recursively.
    fn matching_close(&self, start: usize) -> Result<usize, EngineError> {
        if self.program.op(start) != Some(b'[') {
            return Err(EngineError::InvalidBranchStart { ip: start });
        }

        let mut i = start + 1;
        while i < self.program.len() {
            match self.program.op(i) {
                Some(b']') => return Ok(i),
                // Inner loop: skip its whole body before continuing.
                Some(b'[') => i = self.matching_close(i)?,
                _ => {}
            }
            i += 1;
        }

        Err(EngineError::UnmatchedOpen { ip: start })
    }
}
