//! The distribution brief that drives metadata synthesis.

use reelsmith_core::plan::VideoPlan;
use serde::{Deserialize, Serialize};

/// Topic and audience snapshot for the plan being packaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Topic framed for search intent.
    pub topic: String,
    /// Audience snapshot.
    pub audience: String,
}

/// A validated distribution brief. `plan_details` is a re-submission of a
/// plan the caller previously received; no plan is persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBrief {
    /// Topic and audience snapshot.
    pub plan: PlanSummary,
    /// Mood or voice of the package.
    pub mood: String,
    /// What the upload should achieve on the platform.
    pub platform_goal: String,
    /// The full plan being packaged.
    pub plan_details: VideoPlan,
}
