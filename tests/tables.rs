use std::collections::HashSet;

use mips_rs::isa::mips32::{lookup, Format, TABLE};

#[test]
fn every_shape_agrees_with_its_entry_format() {
    for d in TABLE {
        assert_eq!(
            d.shape.format(),
            d.format,
            "[{}] declares {} format but a {} shape",
            d.mnemonic,
            d.format,
            d.shape.format()
        );
    }
}

#[test]
fn register_format_entries_use_opcode_zero() {
    for d in TABLE {
        match d.format {
            Format::Register => assert_eq!(d.opcode, 0, "[{}]", d.mnemonic),
            Format::Immediate | Format::Jump => {
                assert_eq!(d.funct, 0, "[{}] carries a function code", d.mnemonic)
            }
        }
    }
}

#[test]
fn opcodes_and_function_codes_are_six_bit() {
    for d in TABLE {
        assert!(d.opcode < 64, "[{}]", d.mnemonic);
        assert!(d.funct < 64, "[{}]", d.mnemonic);
    }
}

#[test]
fn mnemonics_are_unique() {
    let names: HashSet<&str> = TABLE.iter().map(|d| d.mnemonic).collect();
    assert_eq!(names.len(), TABLE.len());
}

#[test]
fn lookup_hits_and_misses() {
    assert_eq!(lookup("add").unwrap().funct, 0x20);
    assert_eq!(lookup("sltu").unwrap().funct, 0x2B);
    assert_eq!(lookup("sc").unwrap().opcode, 0x38);
    assert!(lookup("foo").is_none());
    assert!(lookup("ADD").is_none(), "lookup is on lowercased statements");
}
