//! Core types shared across kmdiff facilities
//!
//! This crate holds the canonical schema constants used by the structured
//! logging macros and by tests that assert on captured log events.

pub mod schema;
