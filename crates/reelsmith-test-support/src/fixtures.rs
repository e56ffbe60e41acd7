//! Canonical request payloads and plan fixtures.

use reelsmith_core::plan::VideoPlan;
use serde_json::{Value, json};

/// A plan of the shape the planning generator returns, for tests that
/// replay a plan back through the metadata endpoint.
#[must_use]
pub fn sample_video_plan() -> VideoPlan {
    VideoPlan {
        hook: "Stop scrolling: the energetic take on AI workflow that creators haven't seen yet."
            .to_owned(),
        storyline: vec![
            "Cold open: tease the end result of AI workflow in a single line.".to_owned(),
            "Stakes: name the problem creators hit when they try this without a system."
                .to_owned(),
            "Close: recap the one takeaway and hand off to the call to action.".to_owned(),
        ],
        shots: vec![
            "Tight talking-head framing for the cold open, eyes on lens.".to_owned(),
            "Closing frame holds on the call-to-action overlay.".to_owned(),
        ],
        broll: vec!["Close-up inserts of AI workflow in action.".to_owned()],
        cta: "Subscribe".to_owned(),
        voice_over: vec![
            "Beat 1 VO: tease the end result of AI workflow in a single line.".to_owned(),
        ],
    }
}

/// A complete, valid `planVideo` payload.
#[must_use]
pub fn plan_payload() -> Value {
    json!({
        "topic": "AI workflow",
        "audience": "creators",
        "tone": "energetic",
        "callToAction": "Subscribe",
        "videoLength": "3 minutes",
        "format": "talking head"
    })
}

/// A complete, valid `generateMetadata` payload wrapping
/// [`sample_video_plan`].
#[must_use]
pub fn metadata_payload() -> Value {
    json!({
        "plan": {
            "topic": "AI automation for creators",
            "audience": "YouTube creators scaling workflows"
        },
        "mood": "Bold, tactical, motivating",
        "platformGoal": "drive subscribers",
        "planDetails": serde_json::to_value(sample_video_plan()).expect("plan serializes")
    })
}

/// A complete, valid `chat` payload.
#[must_use]
pub fn chat_payload(message: &str, uploaded: u64, has_plan: bool, has_metadata: bool) -> Value {
    json!({
        "message": message,
        "context": {
            "uploaded": uploaded,
            "hasPlan": has_plan,
            "hasMetadata": has_metadata
        }
    })
}
