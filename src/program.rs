use std::fmt;

/// The eight bytes of the Brainfuck instruction alphabet.
const ALPHABET: &[u8; 8] = b"+-<>,.[]";

/// An immutable, ordered sequence of Brainfuck opcodes.
///
/// Built once by [`Program::load`] and never mutated afterwards. Bracket
/// balance is deliberately not validated here; the engine checks it lazily
/// when a loop is entered, so a stray bracket is only an error if execution
/// ever reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    ops: Vec<u8>,
}

impl Program {
    /// Filter `source` down to the instruction alphabet `+-<>,.[]`, keeping
    /// relative order and silently dropping every other byte. Brainfuck
    /// source conventionally embeds free-form comment text, so unknown
    /// bytes are not an error.
    pub fn load(source: &[u8]) -> Self {
        let ops = source
            .iter()
            .copied()
            .filter(|b| ALPHABET.contains(b))
            .collect();
        Self { ops }
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The opcode at instruction index `ip`, if in range.
    pub fn op(&self, ip: usize) -> Option<u8> {
        self.ops.get(ip).copied()
    }
}

impl fmt::Display for Program {
    /// Renders the filtered instruction text. Error positions index this
    /// text one-to-one, which is what the CLI draws caret context against.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The alphabet is pure ASCII, so this cannot fail.
        f.write_str(std::str::from_utf8(&self.ops).map_err(|_| fmt::Error)?)
    }
}
