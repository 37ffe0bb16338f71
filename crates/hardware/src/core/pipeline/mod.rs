//! Instruction pipeline implementation.
//!
//! This module contains the fetch, decode, execute, and writeback stages and
//! the data they exchange:
//! 1. **Latches:** Entries handed from one stage to the next.
//! 2. **Signals:** The operation set and the tagged execute result.
//! 3. **Stages:** Fetch, Decode, Execute, and Writeback.

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/WB).
pub mod latches;

/// Operation classification and execute-stage result tags.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, writeback).
pub mod stages;
