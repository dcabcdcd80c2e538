use serde::Serialize;
use toolbadge_types::{ToolCallPayload, ToolInvocation, ToolKind};

use crate::message::describe;
use crate::status::{BadgeStatus, is_complete};

/// Everything a rendering layer needs to paint one tool call
///
/// Recomputed from the current record on every change; never updated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub tool_call_id: String,
    pub display_text: String,
    pub is_complete: bool,
    pub kind: ToolKind,
}

impl Badge {
    pub fn from_invocation(invocation: &ToolInvocation) -> Self {
        let payload = ToolCallPayload::from(invocation);
        Self {
            tool_call_id: invocation.tool_call_id.clone(),
            display_text: describe(&payload).to_string(),
            is_complete: is_complete(invocation),
            kind: payload.kind(),
        }
    }

    pub fn status(&self) -> BadgeStatus {
        BadgeStatus::from(self.is_complete)
    }
}

impl From<&ToolInvocation> for Badge {
    fn from(invocation: &ToolInvocation) -> Self {
        Badge::from_invocation(invocation)
    }
}
