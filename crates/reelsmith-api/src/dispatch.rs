//! Request dispatch and success envelopes.
//!
//! A validated request is routed to exactly one generator and handled
//! exactly once, to completion or rejection. No retries, no shared state
//! between requests.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;

use reelsmith_chat::prompt::ChatPrompt;
use reelsmith_chat::responder;
use reelsmith_core::error::AgentError;
use reelsmith_core::plan::VideoPlan;
use reelsmith_metadata::brief::MetadataBrief;
use reelsmith_metadata::generator::build_metadata;
use reelsmith_metadata::metadata::VideoMetadata;
use reelsmith_planning::brief::PlanBrief;
use reelsmith_planning::generator::generate_plan;

/// A validated request, tagged by its action. The dispatcher matches this
/// exhaustively, so adding a fourth action cannot silently fall through.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentRequest {
    /// `planVideo`: draft a narrative plan from a creative brief.
    PlanVideo(PlanBrief),
    /// `generateMetadata`: package a previously returned plan.
    GenerateMetadata(MetadataBrief),
    /// `chat`: compose a contextual reply.
    Chat(ChatPrompt),
}

impl AgentRequest {
    /// The wire-level action tag, for logging.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::PlanVideo(_) => "planVideo",
            Self::GenerateMetadata(_) => "generateMetadata",
            Self::Chat(_) => "chat",
        }
    }
}

/// The success envelope matching the request's action.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AgentResponse {
    /// `{ success: true, plan }`
    Plan {
        /// Always `true`.
        success: bool,
        /// The generated plan.
        plan: VideoPlan,
    },
    /// `{ success: true, metadata }`
    Metadata {
        /// Always `true`.
        success: bool,
        /// The generated metadata package.
        metadata: VideoMetadata,
    },
    /// `{ success: true, reply }`
    Reply {
        /// Always `true`.
        success: bool,
        /// The composed reply.
        reply: String,
    },
}

/// Routes a validated request to its generator.
///
/// Generators are total functions over well-typed input, so this path has
/// no failure branch in normal operation; an unexpected panic inside a
/// generator is caught here and downgraded to a generation fault instead
/// of taking the process down.
///
/// # Errors
///
/// Returns [`AgentError::Generation`] if a generator panics.
pub fn handle(request: AgentRequest) -> Result<AgentResponse, AgentError> {
    catch_unwind(AssertUnwindSafe(|| dispatch(request))).map_err(|_| {
        AgentError::Generation("the agent could not process this request".to_owned())
    })
}

fn dispatch(request: AgentRequest) -> AgentResponse {
    match request {
        AgentRequest::PlanVideo(brief) => AgentResponse::Plan {
            success: true,
            plan: generate_plan(&brief),
        },
        AgentRequest::GenerateMetadata(brief) => AgentResponse::Metadata {
            success: true,
            metadata: build_metadata(&brief),
        },
        AgentRequest::Chat(prompt) => AgentResponse::Reply {
            success: true,
            reply: responder::respond(&prompt),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelsmith_chat::prompt::ChatContext;

    fn plan_request() -> AgentRequest {
        AgentRequest::PlanVideo(PlanBrief {
            topic: "AI workflow".to_owned(),
            audience: "creators".to_owned(),
            tone: "energetic".to_owned(),
            call_to_action: "Subscribe".to_owned(),
            video_length: "3 minutes".to_owned(),
            format: "talking head".to_owned(),
        })
    }

    #[test]
    fn test_plan_request_yields_plan_envelope() {
        // Act
        let response = handle(plan_request()).unwrap();

        // Assert
        let AgentResponse::Plan { success, plan } = response else {
            panic!("expected a plan envelope");
        };
        assert!(success);
        assert_eq!(plan.cta, "Subscribe");
    }

    #[test]
    fn test_chat_request_yields_reply_envelope() {
        let request = AgentRequest::Chat(ChatPrompt {
            message: "status?".to_owned(),
            context: ChatContext {
                uploaded: 0,
                has_plan: false,
                has_metadata: false,
            },
        });

        let response = handle(request).unwrap();

        let AgentResponse::Reply { success, reply } = response else {
            panic!("expected a reply envelope");
        };
        assert!(success);
        assert!(!reply.is_empty());
    }

    #[test]
    fn test_success_envelope_serializes_flat() {
        let response = handle(plan_request()).unwrap();

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert!(json["plan"]["storyline"].is_array());
        assert_eq!(json["plan"]["cta"], "Subscribe");
        // Wire casing comes from the shared plan type.
        assert!(json["plan"]["voiceOver"].is_array());
    }

    #[test]
    fn test_action_tag_matches_wire_contract() {
        assert_eq!(plan_request().action(), "planVideo");
    }
}
