/// Errors that can occur while the engine executes a program.
///
/// Every error is fatal: the engine halts immediately and no instruction
/// after the failing one executes. Each variant carries the instruction
/// pointer at the point of failure; positions index the filtered
/// instruction sequence (see [`crate::Program`]), not the raw source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Loop control was entered at a position whose opcode is not `[`.
    /// Unreachable through normal dispatch; kept as a defensive invariant.
    #[error("loop entered at instruction {ip}, which is not '['")]
    InvalidBranchStart { ip: usize },

    /// A `[` has no matching `]` before the program ends.
    #[error("no matching ']' for '[' at instruction {ip}")]
    UnmatchedOpen { ip: usize },

    /// A `]` was reached by normal dispatch outside any loop construct.
    #[error("unmatched ']' at instruction {ip}")]
    UnmatchedClose { ip: usize },

    /// The cell pointer would move below cell 0.
    #[error("cell pointer underflow at instruction {ip}")]
    CellUnderflow { ip: usize },

    /// The cell pointer would move past the last tape cell.
    #[error("cell pointer overflow at instruction {ip}")]
    CellOverflow { ip: usize },

    /// `,` executed after every input sender was dropped.
    #[error("input channel closed while waiting for a byte at instruction {ip}")]
    InputClosed { ip: usize },

    /// `.` executed after the output receiver was dropped.
    #[error("output channel closed at instruction {ip}")]
    OutputClosed { ip: usize },
}

impl EngineError {
    /// Instruction pointer at the point of failure.
    pub fn ip(&self) -> usize {
        match self {
            Self::InvalidBranchStart { ip }
            | Self::UnmatchedOpen { ip }
            | Self::UnmatchedClose { ip }
            | Self::CellUnderflow { ip }
            | Self::CellOverflow { ip }
            | Self::InputClosed { ip }
            | Self::OutputClosed { ip } => *ip,
        }
    }
}
