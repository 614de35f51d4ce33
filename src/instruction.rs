//! The instruction model: one variant per format, built from a mnemonic and
//! its raw operand text, immutable once constructed.

use crate::error::AsmError;
use crate::isa::mips32::{self, Format, MnemonicDesc, Shape};
use crate::operand::{parse_imm, parse_reg};
use crate::registers::Reg;
use crate::word::{Overflow, WordBuilder};

#[derive(Debug, Clone)]
pub enum Instruction {
    Register {
        desc: &'static MnemonicDesc,
        rs: Reg,
        rt: Reg,
        rd: Reg,
        shamt: i64,
    },
    Immediate {
        desc: &'static MnemonicDesc,
        rs: Reg,
        rt: Reg,
        imm: i64,
    },
    Jump {
        desc: &'static MnemonicDesc,
        addr: i64,
    },
}

fn lookup(mnemonic: &str) -> Result<&'static MnemonicDesc, AsmError> {
    mips32::lookup(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic(mnemonic.to_string()))
}

fn expect_format(desc: &'static MnemonicDesc, expected: Format) -> Result<(), AsmError> {
    if desc.format != expected {
        return Err(AsmError::WrongFormatForMnemonic {
            mnemonic: desc.mnemonic.to_string(),
            expected,
        });
    }
    Ok(())
}

/// Split operand text on commas into exactly `N` parts, python-`maxsplit`
/// style: extra commas fold into the last part and fail downstream, fewer
/// commas than needed fail here.
fn split_args<'a, const N: usize>(
    desc: &'static MnemonicDesc,
    ctx: &'a str,
) -> Result<[&'a str; N], AsmError> {
    let mut parts = ctx.splitn(N, ',');
    let mut out = [""; N];
    let mut found = 0;
    for slot in &mut out {
        match parts.next() {
            Some(p) => {
                *slot = p;
                found += 1;
            }
            None => break,
        }
    }
    if found < N {
        return Err(AsmError::OperandCountMismatch {
            mnemonic: desc.mnemonic,
            expected: N,
            found,
        });
    }
    Ok(out)
}

/// Parse the `imm($reg)` memory-operand form. Anything after the closing
/// parenthesis other than whitespace is an error.
fn split_mem(text: &str) -> Result<(i64, Reg), AsmError> {
    let malformed = || AsmError::MalformedMemoryOperand(text.trim().to_string());
    let open = text.find('(').ok_or_else(malformed)?;
    let close = text.find(')').filter(|&c| c > open).ok_or_else(malformed)?;
    if !text[close + 1..].trim().is_empty() {
        return Err(malformed());
    }
    let imm = parse_imm(&text[..open])?;
    let rs = parse_reg(&text[open + 1..close])?;
    Ok((imm, rs))
}

impl Instruction {
    /// Construct the variant the mnemonic's table entry selects.
    pub fn parse(mnemonic: &str, ctx: &str) -> Result<Self, AsmError> {
        let desc = lookup(mnemonic)?;
        match desc.format {
            Format::Register => Self::from_register_desc(desc, ctx),
            Format::Immediate => Self::from_immediate_desc(desc, ctx),
            Format::Jump => Self::from_jump_desc(desc, ctx),
        }
    }

    /// Register-format constructor; rejects mnemonics of another format.
    pub fn register(mnemonic: &str, ctx: &str) -> Result<Self, AsmError> {
        let desc = lookup(mnemonic)?;
        expect_format(desc, Format::Register)?;
        Self::from_register_desc(desc, ctx)
    }

    /// Immediate-format constructor; rejects mnemonics of another format.
    pub fn immediate(mnemonic: &str, ctx: &str) -> Result<Self, AsmError> {
        let desc = lookup(mnemonic)?;
        expect_format(desc, Format::Immediate)?;
        Self::from_immediate_desc(desc, ctx)
    }

    /// Jump-format constructor; rejects mnemonics of another format.
    pub fn jump(mnemonic: &str, ctx: &str) -> Result<Self, AsmError> {
        let desc = lookup(mnemonic)?;
        expect_format(desc, Format::Jump)?;
        Self::from_jump_desc(desc, ctx)
    }

    fn from_register_desc(desc: &'static MnemonicDesc, ctx: &str) -> Result<Self, AsmError> {
        // Fields a shape leaves unset default to $zero / shift 0.
        let (mut rs, mut rt, mut rd, mut shamt) = (Reg::ZERO, Reg::ZERO, Reg::ZERO, 0i64);
        match desc.shape {
            Shape::RsRt => {
                let [a, b] = split_args(desc, ctx)?;
                rs = parse_reg(a)?;
                rt = parse_reg(b)?;
            }
            Shape::RdRtShamt => {
                let [a, b, c] = split_args(desc, ctx)?;
                rd = parse_reg(a)?;
                rt = parse_reg(b)?;
                shamt = parse_imm(c)?;
            }
            Shape::Rs => {
                rs = parse_reg(ctx)?;
            }
            Shape::RdRtRs => {
                let [a, b, c] = split_args(desc, ctx)?;
                rd = parse_reg(a)?;
                rt = parse_reg(b)?;
                rs = parse_reg(c)?;
            }
            Shape::NoOperands => {}
            Shape::RdRsRt => {
                let [a, b, c] = split_args(desc, ctx)?;
                rd = parse_reg(a)?;
                rs = parse_reg(b)?;
                rt = parse_reg(c)?;
            }
            Shape::Rd => {
                rd = parse_reg(ctx)?;
            }
            _ => unreachable!("non-register shape on a register-format table entry"),
        }
        Ok(Instruction::Register { desc, rs, rt, rd, shamt })
    }

    fn from_immediate_desc(desc: &'static MnemonicDesc, ctx: &str) -> Result<Self, AsmError> {
        let (rs, rt, imm) = match desc.shape {
            Shape::RtRsImm => {
                let [a, b, c] = split_args(desc, ctx)?;
                (parse_reg(b)?, parse_reg(a)?, parse_imm(c)?)
            }
            Shape::RtImm => {
                let [a, b] = split_args(desc, ctx)?;
                (Reg::ZERO, parse_reg(a)?, parse_imm(b)?)
            }
            Shape::RtMem => {
                let [a, b] = split_args(desc, ctx)?;
                let rt = parse_reg(a)?;
                let (imm, rs) = split_mem(b)?;
                (rs, rt, imm)
            }
            _ => unreachable!("non-immediate shape on an immediate-format table entry"),
        };
        Ok(Instruction::Immediate { desc, rs, rt, imm })
    }

    fn from_jump_desc(desc: &'static MnemonicDesc, ctx: &str) -> Result<Self, AsmError> {
        let addr = parse_imm(ctx)?;
        Ok(Instruction::Jump { desc, addr })
    }

    pub fn desc(&self) -> &'static MnemonicDesc {
        match self {
            Instruction::Register { desc, .. }
            | Instruction::Immediate { desc, .. }
            | Instruction::Jump { desc, .. } => desc,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        self.desc().mnemonic
    }

    /// Pack the instruction into its 32-bit word.
    pub fn encode(&self, mode: Overflow) -> Result<u32, AsmError> {
        let word = match *self {
            Instruction::Register { desc, rs, rt, rd, shamt } => WordBuilder::new(mode)
                .push("op", desc.opcode as i64, 6)?
                .push("rs", rs.id() as i64, 5)?
                .push("rt", rt.id() as i64, 5)?
                .push("rd", rd.id() as i64, 5)?
                .push("sh", shamt, 5)?
                .push("func", desc.funct as i64, 6)?
                .finish(),
            Instruction::Immediate { desc, rs, rt, imm } => WordBuilder::new(mode)
                .push("op", desc.opcode as i64, 6)?
                .push("rs", rs.id() as i64, 5)?
                .push("rt", rt.id() as i64, 5)?
                .push("imm", imm, 16)?
                .finish(),
            Instruction::Jump { desc, addr } => WordBuilder::new(mode)
                .push("op", desc.opcode as i64, 6)?
                .push("addr", addr, 26)?
                .finish(),
        };
        Ok(word)
    }

    /// Labeled per-field binary breakdown, for verbose listings.
    pub fn field_breakdown(&self) -> String {
        match *self {
            Instruction::Register { desc, rs, rt, rd, shamt } => format!(
                "op={:06b} rs={:05b} rt={:05b} rd={:05b} sh={:05b} func={:06b}",
                desc.opcode,
                rs.id(),
                rt.id(),
                rd.id(),
                shamt & 0x1F,
                desc.funct,
            ),
            Instruction::Immediate { desc, rs, rt, imm } => format!(
                "op={:06b} rs={:05b} rt={:05b} imm={:016b}",
                desc.opcode,
                rs.id(),
                rt.id(),
                imm & 0xFFFF,
            ),
            Instruction::Jump { desc, addr } => {
                format!("op={:06b} addr={:026b}", desc.opcode, addr & 0x3FF_FFFF)
            }
        }
    }
}

fn hex_imm(v: i64) -> String {
    if v < 0 {
        format!("-{:#x}", v.unsigned_abs())
    } else {
        format!("{v:#x}")
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = self.mnemonic();
        match *self {
            Instruction::Register { desc, rs, rt, rd, shamt } => match desc.shape {
                Shape::RsRt => write!(f, "{m} {rs}, {rt}"),
                Shape::RdRtShamt => write!(f, "{m} {rd}, {rt}, {}", hex_imm(shamt)),
                Shape::Rs => write!(f, "{m} {rs}"),
                Shape::RdRtRs => write!(f, "{m} {rd}, {rt}, {rs}"),
                Shape::NoOperands => write!(f, "{m}"),
                Shape::RdRsRt => write!(f, "{m} {rd}, {rs}, {rt}"),
                Shape::Rd => write!(f, "{m} {rd}"),
                _ => unreachable!(),
            },
            Instruction::Immediate { desc, rs, rt, imm } => match desc.shape {
                Shape::RtRsImm => write!(f, "{m} {rt}, {rs}, {}", hex_imm(imm)),
                Shape::RtImm => write!(f, "{m} {rt}, {}", hex_imm(imm)),
                Shape::RtMem => write!(f, "{m} {rt}, {}({rs})", hex_imm(imm)),
                _ => unreachable!(),
            },
            Instruction::Jump { addr, .. } => write!(f, "{m} {}", hex_imm(addr)),
        }
    }
}
