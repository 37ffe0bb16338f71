//! # Fetch Stage Tests
//!
//! Tests for reading the word resident at the PC.

use mipsim_core::common::error::SimError;
use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::pipeline::stages::fetch_stage;
use mipsim_core::sim::loader::load_program;

#[test]
fn test_fetch_reads_word_at_pc() {
    let imem = load_program(&[0x1111_1111, 0x2222_2222]).unwrap();
    let mut cpu = Cpu::new(&Config::default());
    cpu.pc = 4;
    let entry = fetch_stage(&cpu, &imem).unwrap();
    assert_eq!(entry.pc, 4);
    assert_eq!(entry.inst, 0x2222_2222);
}

#[test]
fn test_fetch_misaligned_pc_is_address_fault() {
    let imem = load_program(&[0x1111_1111, 0x2222_2222]).unwrap();
    let mut cpu = Cpu::new(&Config::default());
    cpu.pc = 2;
    assert_eq!(
        fetch_stage(&cpu, &imem).unwrap_err(),
        SimError::AddressFault { pc: 2 }
    );
}

#[test]
fn test_fetch_past_end_is_address_fault() {
    let imem = load_program(&[0x1111_1111]).unwrap();
    let mut cpu = Cpu::new(&Config::default());
    cpu.pc = 4;
    assert_eq!(
        fetch_stage(&cpu, &imem).unwrap_err(),
        SimError::AddressFault { pc: 4 }
    );
}
