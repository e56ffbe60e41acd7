//! The publish-ready metadata value records.

use serde::{Deserialize, Serialize};

/// A single chapter marker derived from a storyline beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Short label for the chapter.
    pub label: String,
    /// `MM:SS` offset into the video.
    pub timestamp: String,
}

/// The publish-ready metadata package. Produced fresh per request; never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Platform title, clipped to the platform limit.
    pub title: String,
    /// Multi-paragraph description.
    pub description: String,
    /// Deduplicated keywords in first-seen order.
    pub keywords: Vec<String>,
    /// Chapter markers with non-decreasing timestamps, one per storyline
    /// beat.
    pub chapters: Vec<Chapter>,
    /// Small advisory list parameterized by the platform goal.
    pub optimisation_tips: Vec<String>,
}
