use crate::isa::mips32::Format;

/// Everything that can go wrong while parsing or encoding one statement.
/// The driver stops at the first error; there is no per-line recovery.
#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("unknown mnemonic [{0}]")]
    UnknownMnemonic(String),
    #[error("unknown register [{0}]")]
    UnknownRegister(String),
    #[error("malformed register token [{0}]: expected '$' followed by a name or id")]
    MalformedRegisterToken(String),
    #[error("malformed immediate [{0}]")]
    MalformedImmediate(String),
    #[error("malformed memory operand [{0}]: expected imm($reg)")]
    MalformedMemoryOperand(String),
    #[error("[{mnemonic}] expects {expected} operand(s), found {found}")]
    OperandCountMismatch {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("instruction [{mnemonic}] is not {expected}-format")]
    WrongFormatForMnemonic {
        mnemonic: String,
        expected: Format,
    },
    #[error("field {field} value {value:#x} does not fit in {width} bits")]
    FieldWidthViolation {
        field: &'static str,
        value: i64,
        width: u32,
    },
}
