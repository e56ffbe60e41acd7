//! Reelsmith — Metadata Synthesis bounded context.
//!
//! Turns a distribution brief plus a previously generated plan into a
//! publish-ready package: title, description, keywords, chapters, and
//! optimisation tips.

pub mod brief;
pub mod generator;
pub mod metadata;
