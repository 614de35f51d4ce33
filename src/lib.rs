pub mod asm;
pub mod error;
pub mod instruction;
pub mod operand;
pub mod registers;
pub mod word;

pub mod isa {
    pub mod mips32; // classic MIPS32 integer subset
}

pub use asm::{assemble, assemble_words, Encoded};
pub use error::AsmError;
pub use instruction::Instruction;
pub use registers::Reg;
pub use word::Overflow;
