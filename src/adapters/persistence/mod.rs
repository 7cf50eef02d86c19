//! Persistence adapters. The ledger is process memory only.

pub mod memory_ledger;

pub use memory_ledger::MemoryLedger;
