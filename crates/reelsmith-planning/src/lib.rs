//! Reelsmith — Plan Generation bounded context.
//!
//! Turns a creative brief into a narrative plan: hook, storyline beats,
//! shot list, b-roll suggestions, call to action, and voice-over lines.

pub mod brief;
pub mod generator;
