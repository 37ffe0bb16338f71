//! MIPS-like instruction set simulator CLI.
//!
//! This binary supplies instruction words to the simulator and reports the
//! results. It performs:
//! 1. **Run:** Execute the given words (or a built-in demo program) and print the final register state.
//! 2. **Disassemble:** Print an address/word/mnemonic listing for the given words.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::core::cpu::ArchState;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::stats::SimStats;
use mipsim_core::{SimError, Simulator};

/// Program used when `run` gets no `--word` arguments.
const DEMO_PROGRAM: [u32; 8] = [
    0x2009_0007, // addi $t1, $zero, 7
    0x200A_0005, // addi $t2, $zero, 5
    0x012A_4021, // add  $t0, $t1, $t2
    0x012A_0019, // mult $t1, $t2
    0x0000_5812, // mflo $t3
    0x012A_001B, // div  $t1, $t2
    0x0000_6010, // mfhi $t4
    0x310D_000F, // andi $t5, $t0, 0xf
];

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-like instruction set simulator",
    long_about = "Run pre-encoded 32-bit instruction words or print their disassembly.\n\nExamples:\n  mipsim run\n  mipsim run -w 0x21280096 --stats\n  mipsim disasm -w 0x012a4021 -w 0x0c00001c"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program and print the final register state.
    Run {
        /// Instruction word in hex (repeatable, program order). Defaults to a demo program.
        #[arg(short, long = "word", value_parser = parse_word)]
        words: Vec<u32>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Log every pipeline stage.
        #[arg(long)]
        trace: bool,

        /// Abort after this many cycles (0 disables the limit).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Discard writes to register 0.
        #[arg(long)]
        hardwire_zero: bool,

        /// Print the final state as JSON.
        #[arg(long)]
        json: bool,

        /// Print execution statistics.
        #[arg(long)]
        stats: bool,
    },

    /// Disassemble instruction words.
    Disasm {
        /// Instruction word in hex (repeatable). Defaults to the demo program.
        #[arg(short, long = "word", value_parser = parse_word)]
        words: Vec<u32>,
    },
}

/// Final report printed by `run --json`.
#[derive(Serialize, Debug)]
struct Report<'a> {
    state: ArchState,
    stats: &'a SimStats,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            words,
            config,
            trace,
            max_cycles,
            hardwire_zero,
            json,
            stats,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(path).unwrap_or_else(|e| fail(&e)),
                None => Config::default(),
            };
            config.general.trace_instructions |= trace;
            config.registers.hardwire_zero |= hardwire_zero;
            if let Some(limit) = max_cycles {
                config.general.max_cycles = (limit > 0).then_some(limit);
            }
            init_tracing(config.general.trace_instructions);

            let program = if words.is_empty() {
                DEMO_PROGRAM.to_vec()
            } else {
                words
            };
            if let Err(e) = cmd_run(&config, &program, json, stats) {
                fail(&e);
            }
        }
        Commands::Disasm { words } => {
            init_tracing(false);
            let program = if words.is_empty() {
                DEMO_PROGRAM.to_vec()
            } else {
                words
            };
            cmd_disasm(&program);
        }
    }
}

/// Loads `program`, runs it to completion, and prints the final state.
fn cmd_run(config: &Config, program: &[u32], json: bool, stats: bool) -> Result<(), SimError> {
    let mut sim = Simulator::new(config, program)?;
    info!(words = program.len(), "running program");
    let cpu = sim.run()?;

    if json {
        let report = Report {
            state: cpu.arch_state(),
            stats: &cpu.stats,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&SimError::Config(e.to_string())),
        }
    } else {
        for line in cpu.dump() {
            println!("{line}");
        }
    }
    if stats {
        println!();
        println!("{}", cpu.stats);
    }
    Ok(())
}

/// Prints `address: word  mnemonic` for each word in program order.
fn cmd_disasm(program: &[u32]) {
    for (addr, &word) in (0u32..).step_by(4).zip(program) {
        println!("{addr:#06x}: {word:08x}  {}", disassemble(word));
    }
}

/// Installs the fmt subscriber. `RUST_LOG` wins over the defaults.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a hex instruction word, with or without a `0x` prefix.
fn parse_word(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
        .replace('_', "");
    u32::from_str_radix(&digits, 16).map_err(|e| format!("invalid instruction word `{s}`: {e}"))
}

fn fail(err: &SimError) -> ! {
    eprintln!("[!] {err}");
    process::exit(1);
}
