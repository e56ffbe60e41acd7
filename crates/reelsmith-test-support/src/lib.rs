//! Shared fixtures for Reelsmith tests.

mod fixtures;

pub use fixtures::{chat_payload, metadata_payload, plan_payload, sample_video_plan};
