pub mod args;
pub mod call;
pub mod kind;

pub use args::{EditorArgs, FileManagerArgs};
pub use call::{EditorCommand, FILE_MANAGER, FileManagerCommand, STR_REPLACE_EDITOR, ToolCallPayload};
pub use kind::ToolKind;
