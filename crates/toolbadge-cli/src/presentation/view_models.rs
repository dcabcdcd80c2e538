use serde::Serialize;
use toolbadge_format::{Badge, BadgeBoard};
use toolbadge_types::{ToolCallPayload, ToolInvocation};

/// Final state of a stream: every tracked call plus totals
#[derive(Debug, Clone, Serialize)]
pub struct BoardSummary {
    pub badges: Vec<Badge>,
    pub complete: usize,
    pub pending: usize,
}

impl From<&BadgeBoard> for BoardSummary {
    fn from(board: &BadgeBoard) -> Self {
        let (complete, pending) = board.counts();
        Self {
            badges: board.badges(),
            complete,
            pending,
        }
    }
}

/// One record as seen by `inspect`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectEntry {
    pub tool_call_id: String,
    pub tool_name: String,
    pub payload: ToolCallPayload,
    pub badge: Badge,
}

impl From<&ToolInvocation> for InspectEntry {
    fn from(invocation: &ToolInvocation) -> Self {
        Self {
            tool_call_id: invocation.tool_call_id.clone(),
            tool_name: invocation.tool_name.clone(),
            payload: ToolCallPayload::from(invocation),
            badge: Badge::from_invocation(invocation),
        }
    }
}
