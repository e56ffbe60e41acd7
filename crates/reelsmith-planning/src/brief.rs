//! The creative brief that drives plan generation.

use serde::{Deserialize, Serialize};

/// A validated creative brief. Every field holds non-empty text; the
/// validator rejects anything else before this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBrief {
    /// Core topic of the video.
    pub topic: String,
    /// Who the video is for.
    pub audience: String,
    /// Desired tone of delivery.
    pub tone: String,
    /// Caller-supplied call to action, carried into the plan verbatim.
    pub call_to_action: String,
    /// Target runtime, free text (e.g. "3 minutes").
    pub video_length: String,
    /// Production format, free text (e.g. "talking head + screen capture").
    pub format: String,
}
