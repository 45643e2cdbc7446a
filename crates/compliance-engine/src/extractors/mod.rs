//! Small parsing helpers used by the fact checkers
//!
//! Each helper works on already-normalized text and returns an `Option`
//! (or a plain value) instead of failing.

pub mod postal;
pub mod schedule;
pub mod tokens;
