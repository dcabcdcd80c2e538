use serde::{Deserialize, Serialize};
use std::fmt;
use toolbadge_types::{InvocationState, ToolInvocation};

/// Visual state of a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStatus {
    /// Still running, or finished without a usable result
    #[default]
    Pending,
    /// Finished with a truthy result
    Complete,
}

impl BadgeStatus {
    pub fn is_complete(self) -> bool {
        matches!(self, BadgeStatus::Complete)
    }
}

impl From<bool> for BadgeStatus {
    fn from(complete: bool) -> Self {
        if complete {
            BadgeStatus::Complete
        } else {
            BadgeStatus::Pending
        }
    }
}

impl fmt::Display for BadgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeStatus::Pending => write!(f, "pending"),
            BadgeStatus::Complete => write!(f, "complete"),
        }
    }
}

/// True iff the invocation reached the `result` state with a truthy result
pub fn is_complete(invocation: &ToolInvocation) -> bool {
    invocation.lifecycle() == InvocationState::Result && invocation.has_result()
}

pub fn resolve_status(invocation: &ToolInvocation) -> BadgeStatus {
    BadgeStatus::from(is_complete(invocation))
}
