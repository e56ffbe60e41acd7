//! The narrative plan value record.

use serde::{Deserialize, Serialize};

/// A complete narrative plan for a video, produced fresh per request and
/// never mutated afterwards. Order within each sequence is meaningful
/// (narrative/chronological) and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlan {
    /// Opening line designed to stop the scroll.
    pub hook: String,
    /// Narrative beats in presentation order.
    pub storyline: Vec<String>,
    /// Shot list in shooting order.
    pub shots: Vec<String>,
    /// B-roll suggestions thematically tied to the topic.
    pub broll: Vec<String>,
    /// Call to action, carried through from the brief.
    pub cta: String,
    /// Voice-over lines, one per storyline beat.
    pub voice_over: Vec<String>,
}
