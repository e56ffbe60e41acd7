//! Schema validation for the agent endpoint.
//!
//! Rebuilds an untrusted JSON body into a typed [`AgentRequest`],
//! accumulating every violation instead of stopping at the first so a
//! caller can fix all problems at once. Unknown actions are rejected;
//! extra unexpected fields on an otherwise-valid payload pass through.

use reelsmith_chat::prompt::{ChatContext, ChatPrompt};
use reelsmith_core::error::ValidationIssue;
use reelsmith_core::plan::VideoPlan;
use reelsmith_metadata::brief::{MetadataBrief, PlanSummary};
use reelsmith_planning::brief::PlanBrief;
use serde_json::{Map, Value};

use crate::dispatch::AgentRequest;

/// Validates an untyped request body against the three accepted shapes.
///
/// # Errors
///
/// Returns the full list of violations when the body does not match any
/// accepted shape. No generator ever sees a body that failed here.
pub fn parse_request(body: &Value) -> Result<AgentRequest, Vec<ValidationIssue>> {
    let Some(root) = body.as_object() else {
        return Err(vec![ValidationIssue::new("", "expected a JSON object")]);
    };

    let action = match root.get("action") {
        None => {
            return Err(vec![ValidationIssue::new("action", "missing required field")]);
        }
        Some(Value::String(tag)) => tag.as_str(),
        Some(_) => {
            return Err(vec![ValidationIssue::new(
                "action",
                "expected text, got another type",
            )]);
        }
    };

    // Unknown actions are rejected before the payload is inspected.
    if !matches!(action, "planVideo" | "generateMetadata" | "chat") {
        return Err(vec![ValidationIssue::new(
            "action",
            format!("unknown action \"{action}\""),
        )]);
    }

    let payload = match root.get("payload") {
        None => {
            return Err(vec![ValidationIssue::new("payload", "missing required field")]);
        }
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(vec![ValidationIssue::new("payload", "expected an object")]);
        }
    };

    match action {
        "planVideo" => parse_plan_brief(payload).map(AgentRequest::PlanVideo),
        "generateMetadata" => parse_metadata_brief(payload).map(AgentRequest::GenerateMetadata),
        _ => parse_chat_prompt(payload).map(AgentRequest::Chat),
    }
}

fn parse_plan_brief(payload: &Map<String, Value>) -> Result<PlanBrief, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let topic = required_text(payload, "payload", "topic", &mut issues);
    let audience = required_text(payload, "payload", "audience", &mut issues);
    let tone = required_text(payload, "payload", "tone", &mut issues);
    let call_to_action = required_text(payload, "payload", "callToAction", &mut issues);
    let video_length = required_text(payload, "payload", "videoLength", &mut issues);
    let format = required_text(payload, "payload", "format", &mut issues);

    if issues.is_empty() {
        Ok(PlanBrief {
            topic,
            audience,
            tone,
            call_to_action,
            video_length,
            format,
        })
    } else {
        Err(issues)
    }
}

fn parse_metadata_brief(
    payload: &Map<String, Value>,
) -> Result<MetadataBrief, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let summary = required_object(payload, "payload", "plan", &mut issues).map(|plan| {
        PlanSummary {
            topic: required_text(plan, "payload.plan", "topic", &mut issues),
            audience: required_text(plan, "payload.plan", "audience", &mut issues),
        }
    });

    let mood = required_text(payload, "payload", "mood", &mut issues);
    let platform_goal = required_text(payload, "payload", "platformGoal", &mut issues);

    let details = required_object(payload, "payload", "planDetails", &mut issues)
        .map(|details| parse_plan_details(details, &mut issues));

    match (summary, details) {
        (Some(plan), Some(plan_details)) if issues.is_empty() => Ok(MetadataBrief {
            plan,
            mood,
            platform_goal,
            plan_details,
        }),
        _ => Err(issues),
    }
}

/// Validates that `planDetails` structurally matches the plan shape the
/// generator returns. Replayed strings may be empty and the sequences may
/// be empty; only the field set and types are enforced.
fn parse_plan_details(details: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) -> VideoPlan {
    const PREFIX: &str = "payload.planDetails";

    VideoPlan {
        hook: any_text(details, PREFIX, "hook", issues),
        storyline: text_sequence(details, PREFIX, "storyline", issues),
        shots: text_sequence(details, PREFIX, "shots", issues),
        broll: text_sequence(details, PREFIX, "broll", issues),
        cta: any_text(details, PREFIX, "cta", issues),
        voice_over: text_sequence(details, PREFIX, "voiceOver", issues),
    }
}

fn parse_chat_prompt(payload: &Map<String, Value>) -> Result<ChatPrompt, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let message = any_text(payload, "payload", "message", &mut issues);

    let context = required_object(payload, "payload", "context", &mut issues).map(|context| {
        ChatContext {
            uploaded: required_count(context, "payload.context", "uploaded", &mut issues),
            has_plan: required_bool(context, "payload.context", "hasPlan", &mut issues),
            has_metadata: required_bool(context, "payload.context", "hasMetadata", &mut issues),
        }
    });

    match context {
        Some(context) if issues.is_empty() => Ok(ChatPrompt { message, context }),
        _ => Err(issues),
    }
}

/// A required text field that must be non-empty after trimming.
fn required_text(
    payload: &Map<String, Value>,
    parent: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> String {
    match payload.get(field) {
        None => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "missing required field",
            ));
            String::new()
        }
        Some(Value::String(text)) if text.trim().is_empty() => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected non-empty text",
            ));
            String::new()
        }
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected text, got another type",
            ));
            String::new()
        }
    }
}

/// A required text field that may be empty.
fn any_text(
    payload: &Map<String, Value>,
    parent: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> String {
    match payload.get(field) {
        None => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "missing required field",
            ));
            String::new()
        }
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected text, got another type",
            ));
            String::new()
        }
    }
}

/// A required sequence of text values. Offending elements are reported
/// with their index in the path.
fn text_sequence(
    payload: &Map<String, Value>,
    parent: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<String> {
    match payload.get(field) {
        None => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "missing required field",
            ));
            Vec::new()
        }
        Some(Value::Array(items)) => {
            let mut texts = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                if let Value::String(text) = item {
                    texts.push(text.clone());
                } else {
                    issues.push(ValidationIssue::new(
                        format!("{parent}.{field}[{index}]"),
                        "expected text, got another type",
                    ));
                }
            }
            texts
        }
        Some(_) => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected a sequence of text",
            ));
            Vec::new()
        }
    }
}

fn required_object<'a>(
    payload: &'a Map<String, Value>,
    parent: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<&'a Map<String, Value>> {
    match payload.get(field) {
        None => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "missing required field",
            ));
            None
        }
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected an object",
            ));
            None
        }
    }
}

fn required_bool(
    payload: &Map<String, Value>,
    parent: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> bool {
    match payload.get(field) {
        None => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "missing required field",
            ));
            false
        }
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected a boolean",
            ));
            false
        }
    }
}

fn required_count(
    payload: &Map<String, Value>,
    parent: &str,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> u64 {
    match payload.get(field).map(Value::as_u64) {
        None => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "missing required field",
            ));
            0
        }
        Some(Some(count)) => count,
        Some(None) => {
            issues.push(ValidationIssue::new(
                format!("{parent}.{field}"),
                "expected a non-negative integer",
            ));
            0
        }
    }
}
