//! Operand token parsers shared by all instruction formats.

use crate::error::AsmError;
use crate::registers::Reg;

/// Parse a register token: `$` followed by a canonical name or a decimal id.
pub fn parse_reg(token: &str) -> Result<Reg, AsmError> {
    let t = token.trim();
    let Some(rest) = t.strip_prefix('$') else {
        return Err(AsmError::MalformedRegisterToken(t.to_string()));
    };
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
        let id = rest
            .parse::<u8>()
            .map_err(|_| AsmError::UnknownRegister(rest.to_string()))?;
        Reg::from_id(id)
    } else {
        Reg::from_name(rest)
    }
}

/// Parse an immediate or address literal: `0x`/`0X` hex, `0b`/`0B` binary,
/// otherwise signed base-10 decimal.
pub fn parse_imm(token: &str) -> Result<i64, AsmError> {
    let t = token.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).map_err(|_| AsmError::MalformedImmediate(t.to_string()))
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).map_err(|_| AsmError::MalformedImmediate(t.to_string()))
    } else {
        t.parse::<i64>()
            .map_err(|_| AsmError::MalformedImmediate(t.to_string()))
    }
}
