//! Simulator: owns the CPU and the instruction memory side-by-side.
//!
//! The run loop is a two-state machine. It starts `Running` with `pc = 0` and
//! becomes `Halted` once the PC is at or past the end of the populated
//! instruction range; there is no halt instruction. Every fault aborts the run
//! and is returned to the caller.

use tracing::{debug, warn};

use crate::common::error::{Result, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, wb_stage};
use crate::sim::loader;
use crate::soc::memory::InstructionMemory;

/// Run loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Cycles are still being executed.
    Running,
    /// The PC left the populated range. Terminal.
    Halted,
}

/// Outcome of a single [`Simulator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// One instruction went through all four stages.
    Retired,
    /// The simulator is halted; nothing was executed.
    Halted,
}

/// Top-level simulator: CPU architectural state + instruction memory.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, Hi/Lo, PC, stats).
    pub cpu: Cpu,
    /// Instruction memory, read-only once the simulator exists.
    imem: InstructionMemory,
    /// Iteration cap for [`Simulator::run`].
    max_cycles: Option<u64>,
    state: RunState,
}

impl Simulator {
    /// Creates a simulator with `program` loaded from address 0.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the program does not fit in the configured capacity.
    pub fn new(config: &Config, program: &[u32]) -> Result<Self> {
        let imem = loader::load_program_with_capacity(program, config.memory.imem_capacity)?;
        Ok(Self::with_memory(config, imem))
    }

    /// Creates a simulator over an already-populated instruction memory.
    pub fn with_memory(config: &Config, imem: InstructionMemory) -> Self {
        Self {
            cpu: Cpu::new(config),
            imem,
            max_cycles: config.general.max_cycles.filter(|&limit| limit > 0),
            state: RunState::Running,
        }
    }

    /// The instruction memory.
    pub const fn imem(&self) -> &InstructionMemory {
        &self.imem
    }

    /// Current run loop state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether the run loop has reached its terminal state.
    pub const fn is_halted(&self) -> bool {
        matches!(self.state, RunState::Halted)
    }

    /// Advances the simulator by one cycle.
    ///
    /// Halts instead of executing when the PC is at or past the end of the
    /// populated range.
    ///
    /// # Errors
    ///
    /// `AddressFault`, `UnsupportedOpcode`, `UnsupportedFunct`, or `DivisionByZero`.
    /// The CPU is left exactly as it was before the faulting cycle.
    pub fn tick(&mut self) -> Result<Step> {
        if self.state == RunState::Halted {
            return Ok(Step::Halted);
        }
        if self.cpu.pc >= self.imem.next_address() {
            self.state = RunState::Halted;
            debug!(
                pc = self.cpu.pc,
                cycles = self.cpu.stats.cycles,
                "halted: pc left the program"
            );
            return Ok(Step::Halted);
        }

        let if_id = fetch_stage(&self.cpu, &self.imem)?;
        let id_ex = decode_stage(&if_id);
        let ex_wb = execute_stage(&id_ex, &self.cpu)?;
        wb_stage(&ex_wb, &mut self.cpu);
        Ok(Step::Retired)
    }

    /// Runs until the simulator halts.
    ///
    /// # Returns
    ///
    /// The final CPU state.
    ///
    /// # Errors
    ///
    /// Any fault raised by [`Simulator::tick`], or `CycleLimitExceeded` when
    /// the configured cap is reached while the program is still running.
    pub fn run(&mut self) -> Result<&Cpu> {
        loop {
            let running = self.cpu.pc < self.imem.next_address();
            if let Some(limit) = self
                .max_cycles
                .filter(|&limit| running && self.cpu.stats.cycles >= limit)
            {
                warn!(limit, pc = self.cpu.pc, "cycle limit reached");
                return Err(SimError::CycleLimitExceeded { limit });
            }
            match self.tick() {
                Ok(Step::Retired) => {}
                Ok(Step::Halted) => return Ok(&self.cpu),
                Err(e) => {
                    warn!(pc = self.cpu.pc, error = %e, "run aborted");
                    return Err(e);
                }
            }
        }
    }
}
