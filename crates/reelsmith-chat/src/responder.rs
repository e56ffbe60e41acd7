//! Keyword-driven reply composition.

use crate::prompt::{ChatContext, ChatPrompt};

/// What the caller appears to be asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Package and ship the current work.
    Export,
    /// Change something already generated.
    Revise,
    /// Where the production stands.
    Status,
    /// Uploaded footage and other workspace assets.
    Assets,
    /// The narrative plan.
    Plan,
    /// The metadata package.
    Metadata,
    /// A greeting with no concrete request.
    Greeting,
    /// Nothing recognizable.
    Unknown,
}

/// Classifies a message by keyword matching. Earlier intents win when a
/// message matches several.
#[must_use]
pub fn classify(message: &str) -> Intent {
    let msg = message.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|needle| msg.contains(needle));

    if has(&["export", "render", "download", "publish", "package"]) {
        Intent::Export
    } else if has(&["revise", "rework", "tweak", "redo", "edit the"]) {
        Intent::Revise
    } else if has(&["status", "progress", "where are we", "recap"]) {
        Intent::Status
    } else if has(&["upload", "asset", "footage", "clip", "b-roll"]) {
        Intent::Assets
    } else if has(&["plan", "script", "storyline", "outline"]) {
        Intent::Plan
    } else if has(&["metadata", "title", "description", "tags", "keywords", "chapter"]) {
        Intent::Metadata
    } else if has(&["hello", "hey", "good morning"]) || msg.trim() == "hi" {
        Intent::Greeting
    } else {
        Intent::Unknown
    }
}

/// Composes a reply to a chat turn. Always returns non-empty text, and the
/// reply never claims a plan or metadata exist when the context flags say
/// otherwise.
#[must_use]
pub fn respond(prompt: &ChatPrompt) -> String {
    let ctx = prompt.context;
    match classify(&prompt.message) {
        Intent::Export => {
            if ctx.has_metadata {
                "Metadata is ready, so export is a go. Package the edit, attach the metadata, \
                 and queue the upload."
                    .to_owned()
            } else if ctx.has_plan {
                "The plan is drafted but there is no metadata package yet. Generate metadata \
                 first, then export."
                    .to_owned()
            } else {
                "Nothing to export yet. Draft a plan and a metadata package first.".to_owned()
            }
        }
        Intent::Revise => {
            if ctx.has_plan {
                "Happy to rework it. Resubmit the brief with the fields you want to shift and \
                 I'll regenerate the plan."
                    .to_owned()
            } else {
                "There is no plan to revise yet. Send a creative brief and I'll draft the first \
                 pass."
                    .to_owned()
            }
        }
        Intent::Status => status_line(ctx),
        Intent::Assets => {
            if ctx.uploaded == 0 {
                "No assets in the workspace yet. Drop footage or audio and I'll keep count."
                    .to_owned()
            } else {
                format!(
                    "{} asset(s) tracked in the workspace. They stay on your side; I only see \
                     the count.",
                    ctx.uploaded
                )
            }
        }
        Intent::Plan => {
            if ctx.has_plan {
                "A plan is already drafted. Ask me to revise it, or move on to metadata."
                    .to_owned()
            } else {
                "No plan yet. Send a creative brief (topic, audience, tone, format, length, \
                 call to action) and I'll draft one."
                    .to_owned()
            }
        }
        Intent::Metadata => {
            if ctx.has_metadata {
                "The metadata package is ready: title, description, keywords, chapters, and \
                 tips. Say export when you want to ship."
                    .to_owned()
            } else if ctx.has_plan {
                "The plan is in place, so metadata is one request away. Send the distribution \
                 brief and I'll build the package."
                    .to_owned()
            } else {
                "Metadata builds on a plan, and there is no plan yet. Start with a creative \
                 brief."
                    .to_owned()
            }
        }
        Intent::Greeting => format!("Hey! {}", status_line(ctx)),
        Intent::Unknown => format!(
            "I didn't catch a specific request in that. {} Ask for a plan, metadata, a status \
             rundown, or an export.",
            status_line(ctx)
        ),
    }
}

fn status_line(ctx: ChatContext) -> String {
    let plan = if ctx.has_plan {
        "the plan is drafted"
    } else {
        "no plan is drafted yet"
    };
    let metadata = if ctx.has_metadata {
        "metadata is ready"
    } else {
        "no metadata yet"
    };
    format!(
        "Right now: {} asset(s) uploaded, {plan}, and {metadata}.",
        ctx.uploaded
    )
}
