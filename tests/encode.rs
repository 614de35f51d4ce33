use pretty_assertions::assert_eq;

use mips_rs::word::to_hex;
use mips_rs::{Instruction, Overflow};

fn enc(mnemonic: &str, ctx: &str) -> u32 {
    Instruction::parse(mnemonic, ctx)
        .unwrap()
        .encode(Overflow::Truncate)
        .unwrap()
}

#[test]
fn add_three_register() {
    // op=0 rs=t1(9) rt=t2(10) rd=t0(8) sh=0 func=0x20
    assert_eq!(enc("add", "$t0, $t1, $t2"), 0x012A_4020);
    assert_eq!(to_hex(enc("add", "$t0, $t1, $t2")), "012a4020");
}

#[test]
fn addi_immediate() {
    // op=0x8 rs=t1(9) rt=t0(8) imm=0x10
    assert_eq!(enc("addi", "$t0, $t1, 0x10"), 0x2128_0010);
    // same value via binary and decimal literals
    assert_eq!(enc("addi", "$t0, $t1, 0b10000"), 0x2128_0010);
    assert_eq!(enc("addi", "$t0, $t1, 16"), 0x2128_0010);
}

#[test]
fn jump_absolute() {
    assert_eq!(enc("j", "0x4"), 0x0800_0004);
    assert_eq!(enc("jal", "0x4"), 0x0C00_0004);
}

#[test]
fn shift_with_amount() {
    // sll rd=t0(8) rt=t1(9) sh=2 func=0
    assert_eq!(enc("sll", "$t0, $t1, 2"), 0x0009_4080);
}

#[test]
fn variable_shift_register_order() {
    // sllv text order rd, rt, rs: rs=t2(10) rt=t1(9) rd=t0(8) func=4
    assert_eq!(enc("sllv", "$t0, $t1, $t2"), 0x0149_4004);
}

#[test]
fn memory_operands() {
    assert_eq!(enc("lw", "$t0, 4($sp)"), 0x8FA8_0004);
    assert_eq!(enc("sw", "$t0, 4($sp)"), 0xAFA8_0004);
    // whitespace after the closing paren is fine
    assert_eq!(enc("lw", "$t0, 4($sp)  "), 0x8FA8_0004);
}

#[test]
fn lui_two_operand() {
    assert_eq!(enc("lui", "$t0, 0x1234"), 0x3C08_1234);
}

#[test]
fn two_register_and_single_register_shapes() {
    assert_eq!(enc("mult", "$t0, $t1"), 0x0109_0018);
    assert_eq!(enc("jr", "$ra"), 0x03E0_0008);
    assert_eq!(enc("mfhi", "$t0"), 0x0000_4010);
    assert_eq!(enc("syscall", ""), 0x0000_000C);
}

#[test]
fn branch_operand_order_is_rt_rs() {
    // beq rt=t0(8) rs=t1(9) imm=0x10
    assert_eq!(enc("beq", "$t0, $t1, 0x10"), 0x1128_0010);
}

#[test]
fn negative_immediate_packs_twos_complement() {
    assert_eq!(enc("addi", "$t0, $zero, -1"), 0x2008_FFFF);
}

#[test]
fn field_round_trip() {
    for imm in [0i64, 1, 0x7FFF, -1, -0x8000] {
        let w = enc("addi", &format!("$t0, $t1, {imm}"));
        assert_eq!((w & 0xFFFF) as i64, imm & 0xFFFF);
        assert_eq!(w >> 26, 0x8);
    }
    for addr in [0i64, 4, 0x3FF_FFFF] {
        let w = enc("j", &format!("{addr}"));
        assert_eq!((w & 0x3FF_FFFF) as i64, addr);
    }
}

#[test]
fn rendering_matches_operand_order() {
    let r = |m: &str, ctx: &str| Instruction::parse(m, ctx).unwrap().to_string();
    assert_eq!(r("add", "$t0,$t1,$t2"), "add $t0, $t1, $t2");
    assert_eq!(r("addi", "$t0, $t1, 16"), "addi $t0, $t1, 0x10");
    assert_eq!(r("sll", "$t0, $t1, 2"), "sll $t0, $t1, 0x2");
    assert_eq!(r("sllv", "$t0, $t1, $t2"), "sllv $t0, $t1, $t2");
    assert_eq!(r("lw", "$t0, 4($sp)"), "lw $t0, 0x4($sp)");
    assert_eq!(r("lui", "$8, 0x1234"), "lui $t0, 0x1234");
    assert_eq!(r("addi", "$t0, $zero, -1"), "addi $t0, $zero, -0x1");
    assert_eq!(r("j", "0x4"), "j 0x4");
    assert_eq!(r("jr", "$ra"), "jr $ra");
    assert_eq!(r("mult", "$t0, $t1"), "mult $t0, $t1");
    assert_eq!(r("mfhi", "$t0"), "mfhi $t0");
    assert_eq!(r("syscall", ""), "syscall");
}

#[test]
fn field_breakdown_labels() {
    let inst = Instruction::parse("addi", "$t0, $t1, 0x10").unwrap();
    assert_eq!(
        inst.field_breakdown(),
        "op=001000 rs=01001 rt=01000 imm=0000000000010000"
    );
    let inst = Instruction::parse("j", "0x4").unwrap();
    assert_eq!(inst.field_breakdown(), "op=000010 addr=00000000000000000000000100");
}
