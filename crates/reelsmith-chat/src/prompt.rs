//! Chat input types.

use serde::{Deserialize, Serialize};

/// Snapshot of the caller's workspace state at the moment of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    /// Number of uploaded assets in the workspace.
    pub uploaded: u64,
    /// Whether a narrative plan has been generated.
    pub has_plan: bool,
    /// Whether a metadata package has been generated.
    pub has_metadata: bool,
}

/// A single chat turn from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt {
    /// Free-text message.
    pub message: String,
    /// Workspace snapshot.
    pub context: ChatContext,
}
