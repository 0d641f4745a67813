//! Domain layer containing parsing logic and domain types.
//!
//! # Module Organization
//!
//! - `supplement` - Cycles, effective date ranges, results tables and records

pub mod supplement;
