//! Mnemonic table for the classic MIPS32 integer subset.
//!
//! Each mnemonic carries its instruction format, the 6-bit opcode, the 6-bit
//! function code (Register format only) and the operand shape its assembly
//! syntax uses. Arity and operand order are table metadata, not something the
//! constructors re-derive per call.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The three fixed 32-bit field layouts of this subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Register,
    Immediate,
    Jump,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Format::Register => "R",
            Format::Immediate => "I",
            Format::Jump => "J",
        })
    }
}

/// Operand grammar of one mnemonic: which fields appear in the operand text
/// and in which order. Names list the textual order, e.g. `RdRsRt` is
/// `add $rd, $rs, $rt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    // Register format
    RsRt,
    RdRtShamt,
    Rs,
    RdRtRs,
    NoOperands,
    RdRsRt,
    Rd,
    // Immediate format
    RtRsImm,
    RtImm,
    RtMem,
    // Jump format
    Addr,
}

impl Shape {
    /// The format this shape belongs to. Every table entry must agree with
    /// its shape's format; a mismatch is a table bug, not runtime behavior.
    pub fn format(self) -> Format {
        match self {
            Shape::RsRt
            | Shape::RdRtShamt
            | Shape::Rs
            | Shape::RdRtRs
            | Shape::NoOperands
            | Shape::RdRsRt
            | Shape::Rd => Format::Register,
            Shape::RtRsImm | Shape::RtImm | Shape::RtMem => Format::Immediate,
            Shape::Addr => Format::Jump,
        }
    }

    /// Number of comma-separated operands the shape expects.
    pub fn operand_count(self) -> usize {
        match self {
            Shape::NoOperands => 0,
            Shape::Rs | Shape::Rd | Shape::Addr => 1,
            Shape::RsRt | Shape::RtImm | Shape::RtMem => 2,
            Shape::RdRtShamt | Shape::RdRtRs | Shape::RdRsRt | Shape::RtRsImm => 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MnemonicDesc {
    pub mnemonic: &'static str,
    pub format: Format,
    pub opcode: u8,
    /// Function code; meaningful for Register format only, 0 elsewhere.
    pub funct: u8,
    pub shape: Shape,
}

const fn r(mnemonic: &'static str, funct: u8, shape: Shape) -> MnemonicDesc {
    MnemonicDesc { mnemonic, format: Format::Register, opcode: 0x0, funct, shape }
}

const fn i(mnemonic: &'static str, opcode: u8, shape: Shape) -> MnemonicDesc {
    MnemonicDesc { mnemonic, format: Format::Immediate, opcode, funct: 0, shape }
}

const fn j(mnemonic: &'static str, opcode: u8) -> MnemonicDesc {
    MnemonicDesc { mnemonic, format: Format::Jump, opcode, funct: 0, shape: Shape::Addr }
}

pub const TABLE: &[MnemonicDesc] = &[
    r("add", 0x20, Shape::RdRsRt),
    r("addu", 0x21, Shape::RdRsRt),
    r("sub", 0x22, Shape::RdRsRt),
    r("subu", 0x23, Shape::RdRsRt),
    r("and", 0x24, Shape::RdRsRt),
    r("or", 0x25, Shape::RdRsRt),
    r("xor", 0x26, Shape::RdRsRt),
    r("nor", 0x27, Shape::RdRsRt),
    r("slt", 0x2a, Shape::RdRsRt),
    r("sltu", 0x2b, Shape::RdRsRt),
    r("mult", 0x18, Shape::RsRt),
    r("multu", 0x19, Shape::RsRt),
    r("div", 0x1a, Shape::RsRt),
    r("divu", 0x1b, Shape::RsRt),
    r("mfhi", 0x10, Shape::Rd),
    r("mflo", 0x12, Shape::Rd),
    r("sll", 0x00, Shape::RdRtShamt),
    r("srl", 0x02, Shape::RdRtShamt),
    r("sra", 0x03, Shape::RdRtShamt),
    r("sllv", 0x04, Shape::RdRtRs),
    r("srlv", 0x06, Shape::RdRtRs),
    r("srav", 0x07, Shape::RdRtRs),
    r("jr", 0x08, Shape::Rs),
    r("jalr", 0x09, Shape::Rs),
    r("syscall", 0x0c, Shape::NoOperands),
    i("addi", 0x08, Shape::RtRsImm),
    i("addiu", 0x09, Shape::RtRsImm),
    i("slti", 0x0a, Shape::RtRsImm),
    i("sltiu", 0x0b, Shape::RtRsImm),
    i("andi", 0x0c, Shape::RtRsImm),
    i("ori", 0x0d, Shape::RtRsImm),
    i("xori", 0x0e, Shape::RtRsImm),
    i("beq", 0x04, Shape::RtRsImm),
    i("bne", 0x05, Shape::RtRsImm),
    i("lui", 0x0f, Shape::RtImm),
    i("lb", 0x20, Shape::RtMem),
    i("lh", 0x21, Shape::RtMem),
    i("lw", 0x23, Shape::RtMem),
    i("lbu", 0x24, Shape::RtMem),
    i("lhu", 0x25, Shape::RtMem),
    i("sb", 0x28, Shape::RtMem),
    i("sh", 0x29, Shape::RtMem),
    i("sw", 0x2b, Shape::RtMem),
    i("ll", 0x30, Shape::RtMem),
    i("sc", 0x38, Shape::RtMem),
    j("j", 0x02),
    j("jal", 0x03),
];

/// Mnemonic lookup over an index built once on first use.
pub fn lookup(mnemonic: &str) -> Option<&'static MnemonicDesc> {
    static INDEX: OnceLock<HashMap<&'static str, &'static MnemonicDesc>> = OnceLock::new();
    INDEX
        .get_or_init(|| TABLE.iter().map(|d| (d.mnemonic, d)).collect())
        .get(mnemonic)
        .copied()
}
