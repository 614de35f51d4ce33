//! Packing of fixed-width bit fields into one 32-bit instruction word.

use serde::{Deserialize, Serialize};

use crate::error::AsmError;

/// What to do when a field value does not fit its declared width.
/// `Truncate` masks the high bits away; `Strict` rejects the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overflow {
    Strict,
    #[default]
    Truncate,
}

/// Accumulates fields most-significant-first. All three formats use this;
/// a finished word always holds exactly 32 bits.
#[derive(Debug)]
pub struct WordBuilder {
    word: u32,
    bits: u32,
    mode: Overflow,
}

impl WordBuilder {
    pub fn new(mode: Overflow) -> Self {
        Self { word: 0, bits: 0, mode }
    }

    pub fn push(mut self, field: &'static str, value: i64, width: u32) -> Result<Self, AsmError> {
        debug_assert!(self.bits + width <= 32);
        if self.mode == Overflow::Strict {
            // Signed values fit if their two's complement form does.
            let lo = -(1i64 << (width - 1));
            let hi = 1i64 << width;
            if value < lo || value >= hi {
                return Err(AsmError::FieldWidthViolation { field, value, width });
            }
        }
        let mask = (1u64 << width) - 1;
        self.word = (self.word << width) | (value as u64 & mask) as u32;
        self.bits += width;
        Ok(self)
    }

    pub fn finish(self) -> u32 {
        debug_assert_eq!(self.bits, 32);
        self.word
    }
}

/// 32-character zero-padded binary rendering.
pub fn to_bin(word: u32) -> String {
    format!("{word:032b}")
}

/// 8-character lowercase hexadecimal rendering.
pub fn to_hex(word: u32) -> String {
    format!("{word:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(mode: Overflow, fields: &[(&'static str, i64, u32)]) -> Result<u32, AsmError> {
        let mut b = WordBuilder::new(mode);
        for &(name, value, width) in fields {
            b = b.push(name, value, width)?;
        }
        Ok(b.finish())
    }

    #[test]
    fn packs_msb_first() {
        let w = pack(
            Overflow::Strict,
            &[("op", 0x8, 6), ("rs", 9, 5), ("rt", 8, 5), ("imm", 0x10, 16)],
        )
        .unwrap();
        assert_eq!(w, 0x2128_0010);
    }

    #[test]
    fn truncate_masks_high_bits() {
        let w = pack(Overflow::Truncate, &[("imm", 0x1_2345, 16), ("pad", 0, 16)]).unwrap();
        assert_eq!(w >> 16, 0x2345);
    }

    #[test]
    fn strict_rejects_oversized_value() {
        let err = pack(Overflow::Strict, &[("imm", 0x1_0000, 16), ("pad", 0, 16)]).unwrap_err();
        assert!(matches!(
            err,
            AsmError::FieldWidthViolation { field: "imm", width: 16, .. }
        ));
    }

    #[test]
    fn strict_accepts_signed_in_range() {
        let w = pack(Overflow::Strict, &[("imm", -1, 16), ("pad", 0, 16)]).unwrap();
        assert_eq!(w >> 16, 0xFFFF);
        let err = pack(Overflow::Strict, &[("imm", -0x8001, 16), ("pad", 0, 16)]).unwrap_err();
        assert!(matches!(err, AsmError::FieldWidthViolation { .. }));
    }

    #[test]
    fn renderings() {
        assert_eq!(to_hex(0x012A_4020), "012a4020");
        assert_eq!(to_bin(0x0800_0004), "00001000000000000000000000000100");
        assert_eq!(to_bin(0).len(), 32);
    }
}
