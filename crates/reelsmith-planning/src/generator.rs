//! Deterministic plan generation.
//!
//! `generate_plan` is a total function over its input: the same brief
//! always yields the same plan, and arbitrary printable text is clipped
//! where it is embedded in composed sentences, never rejected.

use reelsmith_core::plan::VideoPlan;
use reelsmith_core::text;

use crate::brief::PlanBrief;

/// Longest slice of a brief field embedded into a composed sentence.
const EMBED_MAX_CHARS: usize = 80;

/// Generates a narrative plan from a creative brief.
#[must_use]
pub fn generate_plan(brief: &PlanBrief) -> VideoPlan {
    let storyline = storyline_beats(brief);
    let voice_over = voice_over_lines(&storyline);

    VideoPlan {
        hook: compose_hook(brief),
        shots: shot_list(brief),
        broll: broll_ideas(brief),
        cta: brief.call_to_action.clone(),
        storyline,
        voice_over,
    }
}

fn compose_hook(brief: &PlanBrief) -> String {
    let topic = text::clip(&brief.topic, EMBED_MAX_CHARS);
    let tone = text::clip(&brief.tone, EMBED_MAX_CHARS);
    let audience = text::clip(&brief.audience, EMBED_MAX_CHARS);
    format!("Stop scrolling: the {tone} take on {topic} that {audience} haven't seen yet.")
}

/// Derives a fixed set of narrative beats from the brief. Beats carry a
/// production-note prefix ("Cold open: ...") that the voice-over strips.
fn storyline_beats(brief: &PlanBrief) -> Vec<String> {
    let topic = text::clip(&brief.topic, EMBED_MAX_CHARS);
    let audience = text::clip(&brief.audience, EMBED_MAX_CHARS);
    let tone = text::clip(&brief.tone, EMBED_MAX_CHARS);

    vec![
        format!("Cold open: tease the end result of {topic} in a single line."),
        format!("Stakes: name the problem {audience} hit when they try this without a system."),
        format!("Core walkthrough: break {topic} into three moves, keeping the {tone} energy up."),
        format!("Payoff: show what changes for {audience} once the system clicks."),
        "Close: recap the one takeaway and hand off to the call to action.".to_owned(),
    ]
}

/// Derives a shot list from format hints and the target length. The brief's
/// `format` is free text; known production styles get specific coverage
/// cues, anything else gets a generic primary setup.
fn shot_list(brief: &PlanBrief) -> Vec<String> {
    let format_hint = brief.format.to_lowercase();
    let mut shots = Vec::new();

    if format_hint.contains("talking") {
        shots.push("Tight talking-head framing for the cold open, eyes on lens.".to_owned());
    }
    if format_hint.contains("screen") {
        shots.push(
            "Full-screen capture with cursor highlights for each walkthrough step.".to_owned(),
        );
    }
    if shots.is_empty() {
        let format = text::clip(&brief.format, EMBED_MAX_CHARS);
        shots.push(format!("Primary setup staged for a {format} delivery."));
    }

    shots.push("Punch-in on every storyline turn to reset attention.".to_owned());
    shots.push(format!(
        "Pace coverage so the edit lands at {}.",
        text::clip(&brief.video_length, EMBED_MAX_CHARS)
    ));
    shots.push("Closing frame holds on the call-to-action overlay.".to_owned());
    shots
}

/// Derives b-roll suggestions thematically tied to the topic.
fn broll_ideas(brief: &PlanBrief) -> Vec<String> {
    let topic = text::clip(&brief.topic, EMBED_MAX_CHARS);
    let mut ideas = vec![
        format!("Close-up inserts of {topic} in action."),
        format!(
            "Ambient workspace cutaways that read as {}.",
            text::clip(&brief.tone, EMBED_MAX_CHARS)
        ),
        format!(
            "Overlay shots of results {} actually care about.",
            text::clip(&brief.audience, EMBED_MAX_CHARS)
        ),
    ];

    for word in text::significant_words(&brief.topic).into_iter().take(2) {
        ideas.push(format!("Texture footage themed around \"{word}\"."));
    }
    ideas
}

/// Echoes the storyline beats in spoken form, one line per beat.
fn voice_over_lines(storyline: &[String]) -> Vec<String> {
    storyline
        .iter()
        .enumerate()
        .map(|(index, beat)| {
            let line = beat.split_once(": ").map_or(beat.as_str(), |(_, rest)| rest);
            format!("Beat {} VO: {line}", index + 1)
        })
        .collect()
}
