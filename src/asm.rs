//! The assembly driver: one pass over a source text, strictly in input
//! order, aborting on the first bad statement.

use serde::Serialize;
use tracing::debug;

use crate::error::AsmError;
use crate::instruction::Instruction;
use crate::word::{self, Overflow};

/// One encoded statement, ready for listing or serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Encoded {
    /// Canonical assembly rendering (immediates in hex).
    pub asm: String,
    /// The 32-bit instruction word.
    pub word: u32,
    /// Labeled binary field breakdown.
    pub fields: String,
}

impl Encoded {
    pub fn hex(&self) -> String {
        word::to_hex(self.word)
    }
}

/// Encode a whole source text. Lines are split on `;` into statements;
/// statements are trimmed, lowercased, and empty ones dropped.
pub fn assemble(src: &str, mode: Overflow) -> Result<Vec<Encoded>, AsmError> {
    let mut out = Vec::new();
    for line in src.lines() {
        for stmt in line.split(';') {
            let stmt = stmt.trim().to_lowercase();
            if stmt.is_empty() {
                continue;
            }
            let (mnemonic, ctx) = match stmt.split_once(char::is_whitespace) {
                Some((m, rest)) => (m, rest.trim()),
                None => (stmt.as_str(), ""),
            };
            let inst = Instruction::parse(mnemonic, ctx)?;
            let word = inst.encode(mode)?;
            debug!(asm = %inst, word = %word::to_hex(word), "encoded statement");
            out.push(Encoded {
                asm: inst.to_string(),
                word,
                fields: inst.field_breakdown(),
            });
        }
    }
    Ok(out)
}

/// Like [`assemble`], keeping only the instruction words.
pub fn assemble_words(src: &str, mode: Overflow) -> Result<Vec<u32>, AsmError> {
    Ok(assemble(src, mode)?.into_iter().map(|e| e.word).collect())
}
