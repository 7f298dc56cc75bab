//! Infrastructure adapters. Implement ports.
//!
//! Language service, filesystem, speech, terminal. Map errors to DomainError.

pub mod ai;
pub mod persistence;
pub mod speech;
pub mod ui;
