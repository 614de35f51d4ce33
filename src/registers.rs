use serde::{Deserialize, Serialize};

use crate::error::AsmError;

/// Canonical register names, indexed by register id (0..=31).
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", // 0..7
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", // 8..15
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", // 16..23
    "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra", // 24..31
];

/// A general-purpose register, identified by its 5-bit id.
/// The id <-> name mapping is bijective and fixed for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reg(u8);

impl Reg {
    pub const ZERO: Reg = Reg(0);

    pub fn from_id(id: u8) -> Result<Reg, AsmError> {
        if (id as usize) < REG_NAMES.len() {
            Ok(Reg(id))
        } else {
            Err(AsmError::UnknownRegister(id.to_string()))
        }
    }

    pub fn from_name(name: &str) -> Result<Reg, AsmError> {
        REG_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Reg(i as u8))
            .ok_or_else(|| AsmError::UnknownRegister(name.to_string()))
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        REG_NAMES[self.0 as usize]
    }
}

impl std::fmt::Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.name())
    }
}
