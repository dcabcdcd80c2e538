use std::collections::HashMap;

use toolbadge_types::ToolInvocation;

use crate::badge::Badge;
use crate::status::is_complete;

/// Outcome of applying one record to a [`BadgeBoard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardUpdate {
    /// First record seen for this `toolCallId`
    Inserted,
    /// Replaced a different earlier record
    Updated,
    /// Identical to the record already held
    Unchanged,
}

/// Current invocation records keyed by `toolCallId`, in first-seen order
///
/// Later records for the same id replace earlier ones without moving them.
/// Records with an empty id cannot be correlated and are always appended.
#[derive(Debug, Clone, Default)]
pub struct BadgeBoard {
    entries: Vec<ToolInvocation>,
    index: HashMap<String, usize>,
}

impl BadgeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, invocation: ToolInvocation) -> BoardUpdate {
        if invocation.tool_call_id.is_empty() {
            self.entries.push(invocation);
            return BoardUpdate::Inserted;
        }

        if let Some(&pos) = self.index.get(&invocation.tool_call_id) {
            let slot = &mut self.entries[pos];
            if *slot == invocation {
                return BoardUpdate::Unchanged;
            }
            *slot = invocation;
            return BoardUpdate::Updated;
        }

        self.index
            .insert(invocation.tool_call_id.clone(), self.entries.len());
        self.entries.push(invocation);
        BoardUpdate::Inserted
    }

    pub fn get(&self, tool_call_id: &str) -> Option<&ToolInvocation> {
        self.index.get(tool_call_id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolInvocation> {
        self.entries.iter()
    }

    pub fn badges(&self) -> Vec<Badge> {
        self.entries.iter().map(Badge::from_invocation).collect()
    }

    /// `(complete, pending)` counts
    pub fn counts(&self) -> (usize, usize) {
        let complete = self.entries.iter().filter(|inv| is_complete(inv)).count();
        (complete, self.entries.len() - complete)
    }
}

impl FromIterator<ToolInvocation> for BadgeBoard {
    fn from_iter<I: IntoIterator<Item = ToolInvocation>>(iter: I) -> Self {
        let mut board = BadgeBoard::new();
        for invocation in iter {
            board.upsert(invocation);
        }
        board
    }
}
