//! Infrastructure adapters. Implement outbound ports.
//!
//! Catalog data, in-memory persistence, terminal UI. Map errors to DomainError.

pub mod catalog;
pub mod persistence;
pub mod ui;
