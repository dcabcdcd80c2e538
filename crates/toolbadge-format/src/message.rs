use std::fmt;

use toolbadge_types::{EditorCommand, FileManagerCommand, ToolCallPayload, ToolInvocation};

use crate::filename::filename_of;

/// Structured status line for one tool call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Description<'a> {
    /// Verb applied to a file, e.g. `Creating Card.jsx`
    Action { verb: &'static str, target: &'a str },
    /// `Renaming Old.jsx → New.jsx`
    Rename { from: &'a str, to: &'a str },
    /// Tool name shown verbatim
    Raw(&'a str),
}

impl Description<'_> {
    /// Leading verb, or the raw tool name for unknown tools
    pub fn verb(&self) -> &str {
        match self {
            Description::Action { verb, .. } => verb,
            Description::Rename { .. } => "Renaming",
            Description::Raw(name) => name,
        }
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Action { verb, target } => {
                let text = format!("{} {}", verb, target);
                f.write_str(text.trim_end())
            }
            Description::Rename { from, to } => {
                let text = format!("Renaming {} → {}", from, to);
                f.write_str(text.trim_end())
            }
            // Unknown tool names are never trimmed or rewritten
            Description::Raw(name) => f.write_str(name),
        }
    }
}

/// Describe a normalized tool call
pub fn describe(payload: &ToolCallPayload) -> Description<'_> {
    match payload {
        ToolCallPayload::StrReplaceEditor { command, path } => {
            let verb = match command {
                EditorCommand::Create => "Creating",
                EditorCommand::StrReplace | EditorCommand::Insert | EditorCommand::UndoEdit => {
                    "Editing"
                }
                EditorCommand::View => "Viewing",
                EditorCommand::Other(_) => "Updating",
            };
            Description::Action {
                verb,
                target: filename_of(path.as_deref()),
            }
        }
        ToolCallPayload::FileManager { command, path } => {
            let target = filename_of(path.as_deref());
            match command {
                FileManagerCommand::Rename { new_path } => Description::Rename {
                    from: target,
                    to: filename_of(new_path.as_deref()),
                },
                FileManagerCommand::Delete => Description::Action {
                    verb: "Deleting",
                    target,
                },
                FileManagerCommand::Other(_) => Description::Action {
                    verb: "Managing",
                    target,
                },
            }
        }
        ToolCallPayload::Unknown { name } => Description::Raw(name),
    }
}

/// Human-readable status line for a tool invocation
///
/// Total over all inputs: unrecognized commands fall back to a generic verb
/// and unknown tools are shown by name.
pub fn format_message(invocation: &ToolInvocation) -> String {
    describe(&ToolCallPayload::from(invocation)).to_string()
}
