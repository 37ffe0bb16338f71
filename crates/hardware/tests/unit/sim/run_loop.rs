//! # Run Loop Scenarios
//!
//! End-to-end programs driven through fetch, decode, execute, and writeback
//! until the PC leaves the populated range or a fault aborts the run.

use pretty_assertions::assert_eq;

use mipsim_core::common::error::SimError;
use mipsim_core::config::Config;
use mipsim_core::sim::{RunState, Simulator, Step};

use crate::common::builder::instruction::InstructionBuilder as I;
use crate::common::harness::TestContext;

/// addi $t1, $zero, 7 / addi $t2, $zero, 5 / add / mult / mflo / div / mfhi / andi
const DEMO: [u32; 8] = [
    0x2009_0007,
    0x200A_0005,
    0x012A_4021,
    0x012A_0019,
    0x0000_5812,
    0x012A_001B,
    0x0000_6010,
    0x310D_000F,
];

#[test]
fn test_addi_scenario() {
    let mut ctx = TestContext::new().load_program(&[0x2128_0096]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(8), 150);
    assert_eq!(ctx.cpu().pc, 4);
    assert!(ctx.sim.is_halted());
}

#[test]
fn test_empty_program_halts_immediately() {
    let mut ctx = TestContext::new().load_program(&[]);
    ctx.run().unwrap();
    assert_eq!(ctx.cpu().pc, 0);
    assert_eq!(ctx.cpu().stats.cycles, 0);
}

#[test]
fn test_mult_then_mflo() {
    let mut ctx = TestContext::new().load_program(&[
        I::addi(9, 0, 7),
        I::addi(10, 0, 5),
        I::mult(9, 10),
        I::mflo(11),
    ]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(11), 35);
    assert_eq!((ctx.cpu().hi, ctx.cpu().lo), (0, 35));
    assert_eq!(ctx.cpu().pc, 16);
}

#[test]
fn test_mult_large_product_fills_hi() {
    let mut ctx = TestContext::new().load_program(&[I::mult(9, 10), I::mfhi(8), I::mflo(11)]);
    ctx.set_reg(9, 0x0001_0000);
    ctx.set_reg(10, 0x0003_0000);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(8), 3);
    assert_eq!(ctx.get_reg(11), 0);
}

#[test]
fn test_demo_program_final_state() {
    let mut ctx = TestContext::new().load_program(&DEMO);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(9), 7);
    assert_eq!(ctx.get_reg(10), 5);
    assert_eq!(ctx.get_reg(8), 12);
    assert_eq!(ctx.get_reg(11), 35);
    assert_eq!(ctx.get_reg(12), 2);
    assert_eq!(ctx.get_reg(13), 12);
    assert_eq!((ctx.cpu().hi, ctx.cpu().lo), (2, 1));
    assert_eq!(ctx.cpu().pc, 32);

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.inst_alu, 4);
    assert_eq!(stats.inst_muldiv, 2);
    assert_eq!(stats.inst_move, 2);
    assert_eq!(stats.inst_jump, 0);
}

#[test]
fn test_divide_by_zero_aborts() {
    let mut ctx = TestContext::new().load_program(&[I::addi(9, 0, 7), I::div(9, 10), I::addi(8, 0, 1)]);
    assert_eq!(ctx.run(), Err(SimError::DivisionByZero { pc: 4 }));
    assert_eq!(ctx.cpu().pc, 4);
    assert_eq!(ctx.get_reg(8), 0);
    assert_eq!((ctx.cpu().hi, ctx.cpu().lo), (0, 0));
}

#[test]
fn test_jal_links_and_halts_past_end() {
    let mut ctx = TestContext::new().load_program(&[0x0C00_001C]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(31), 0);
    assert_eq!(ctx.cpu().pc, 28);
    assert!(ctx.sim.is_halted());
}

#[test]
fn test_jal_links_its_own_pc() {
    let mut ctx = TestContext::new().load_program(&[
        I::addi(8, 0, 1),
        I::addi(8, 8, 1),
        I::jal(16),
        I::addi(8, 8, 100),
        I::addi(9, 0, 5),
    ]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(31), 8);
    assert_eq!(ctx.get_reg(8), 2);
    assert_eq!(ctx.get_reg(9), 5);
    assert_eq!(ctx.cpu().pc, 20);
}

#[test]
fn test_misaligned_jump_target_is_address_fault() {
    let mut ctx = TestContext::new().load_program(&[I::j(6), I::addi(8, 0, 1), I::addi(8, 0, 2)]);
    assert_eq!(ctx.run(), Err(SimError::AddressFault { pc: 6 }));
    assert_eq!(ctx.get_reg(8), 0);
}

#[test]
fn test_unsupported_opcode_aborts() {
    let lw = I::new().opcode(0x23).rt(8).rs(9).build_i();
    let mut ctx = TestContext::new().load_program(&[I::addi(8, 0, 1), lw]);
    assert_eq!(
        ctx.run(),
        Err(SimError::UnsupportedOpcode { opcode: 0x23, pc: 4 })
    );
    assert_eq!(ctx.get_reg(8), 1);
}

#[test]
fn test_unsupported_funct_aborts() {
    let slt = I::new().rd(8).rs(9).rt(10).funct(0x2A).build_r();
    let mut ctx = TestContext::new().load_program(&[slt]);
    assert_eq!(
        ctx.run(),
        Err(SimError::UnsupportedFunct { funct: 0x2A, pc: 0 })
    );
}

#[test]
fn test_register_zero_writable_by_default() {
    let mut ctx = TestContext::new().load_program(&[I::addi(0, 0, 5), I::add(8, 0, 0)]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(0), 5);
    assert_eq!(ctx.get_reg(8), 10);
}

#[test]
fn test_register_zero_hardwired_by_config() {
    let mut config = Config::default();
    config.registers.hardwire_zero = true;
    let mut ctx = TestContext::with_config(config).load_program(&[I::addi(0, 0, 5), I::add(8, 0, 0)]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(8), 0);
}

#[test]
fn test_cycle_limit_stops_infinite_loop() {
    let mut config = Config::default();
    config.general.max_cycles = Some(10);
    let mut ctx = TestContext::with_config(config).load_program(&[I::j(0)]);
    assert_eq!(ctx.run(), Err(SimError::CycleLimitExceeded { limit: 10 }));
    assert_eq!(ctx.cpu().stats.cycles, 10);
}

#[test]
fn test_cycle_limit_not_hit_by_finishing_program() {
    let mut config = Config::default();
    config.general.max_cycles = Some(2);
    let mut ctx = TestContext::with_config(config).load_program(&[I::addi(8, 0, 1), I::addi(9, 0, 2)]);
    ctx.run().unwrap();
    assert_eq!(ctx.cpu().stats.cycles, 2);
}

#[test]
fn test_runs_are_deterministic() {
    let config = Config::default();
    let mut a = Simulator::new(&config, &DEMO).unwrap();
    let mut b = Simulator::new(&config, &DEMO).unwrap();
    let first = a.run().unwrap().arch_state();
    let second = b.run().unwrap().arch_state();
    assert_eq!(first, second);
    assert_eq!(a.cpu.stats, b.cpu.stats);
}

#[test]
fn test_tick_steps_then_halts() {
    let mut sim = Simulator::new(&Config::default(), &[I::addi(8, 0, 3)]).unwrap();
    assert_eq!(sim.state(), RunState::Running);
    assert_eq!(sim.tick(), Ok(Step::Retired));
    assert_eq!(sim.cpu.regs.read(8), 3);
    assert_eq!(sim.tick(), Ok(Step::Halted));
    assert_eq!(sim.tick(), Ok(Step::Halted));
    assert_eq!(sim.state(), RunState::Halted);
}

#[test]
fn test_new_rejects_oversized_program() {
    let mut config = Config::default();
    config.memory.imem_capacity = 2;
    let err = Simulator::new(&config, &[1, 2, 3]).unwrap_err();
    assert_eq!(err, SimError::CapacityExceeded { capacity: 2 });
}

#[test]
fn test_zero_cycle_limit_in_config_disables_cap() {
    let config = Config::from_json(r#"{ "general": { "max_cycles": 0 } }"#).unwrap();
    let mut ctx = TestContext::with_config(config).load_program(&[I::addi(8, 0, 1)]);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(8), 1);
    assert!(ctx.sim.is_halted());
}
