//! Core BOM analysis: domain model, lookup policies and aggregation services
//!
//! Everything in this module is synchronous and free of I/O. Tables come in,
//! metrics and requirement lines come out.

pub mod domain;
pub mod policies;
pub mod services;
