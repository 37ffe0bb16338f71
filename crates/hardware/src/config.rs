//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants for capacity and run limits.
//! 2. **Structures:** Hierarchical config for general, memory, and register settings.
//! 3. **Loading:** JSON parsing from a string or a file, with every field optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{IMEM_CAPACITY, MAX_CYCLES};
use crate::common::error::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    use super::{IMEM_CAPACITY, MAX_CYCLES};

    /// Instruction memory slot count.
    pub const IMEM_SLOTS: usize = IMEM_CAPACITY;

    /// Iteration cap for the run loop.
    pub const CYCLE_LIMIT: Option<u64> = Some(MAX_CYCLES);
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 500 },
///     "registers": { "hardwire_zero": true }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(500));
/// assert_eq!(config.memory.imem_capacity, 32);
/// assert!(config.registers.hardwire_zero);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Register file configuration
    #[serde(default)]
    pub registers: RegisterConfig,
}

impl Config {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// `SimError::Config` if the text is not valid JSON for this schema.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SimError::Config(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// `SimError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every stage of every cycle at trace level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort with `CycleLimitExceeded` after this many cycles; `null` or `0` disables the cap
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default iteration cap.
    const fn default_max_cycles() -> Option<u64> {
        defaults::CYCLE_LIMIT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::CYCLE_LIMIT,
        }
    }
}

/// Instruction memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Number of instruction slots
    #[serde(default = "MemoryConfig::default_imem_capacity")]
    pub imem_capacity: usize,
}

impl MemoryConfig {
    /// Returns the default instruction memory capacity.
    const fn default_imem_capacity() -> usize {
        defaults::IMEM_SLOTS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_capacity: defaults::IMEM_SLOTS,
        }
    }
}

/// Register file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterConfig {
    /// Discard writes to `$zero` instead of treating it as an ordinary register
    #[serde(default)]
    pub hardwire_zero: bool,
}
