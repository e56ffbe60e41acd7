//! Reelsmith Core — shared domain types.
//!
//! This crate defines the value records and error taxonomy that all bounded
//! contexts depend on, plus the text-composition helpers the generators
//! share. It contains no infrastructure code.

pub mod error;
pub mod plan;
pub mod text;
