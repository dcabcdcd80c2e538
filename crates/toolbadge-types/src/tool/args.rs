use serde_json::Value;

use crate::util::str_arg;

/// Arguments recognized for `str_replace_editor`
///
/// Other keys (`file_text`, `old_str`, `view_range`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorArgs {
    pub command: Option<String>,
    pub path: Option<String>,
}

impl EditorArgs {
    pub fn from_args(args: &Value) -> Self {
        Self {
            command: str_arg(args, "command").map(str::to_string),
            path: str_arg(args, "path").map(str::to_string),
        }
    }
}

/// Arguments recognized for `file_manager`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileManagerArgs {
    pub command: Option<String>,
    pub path: Option<String>,
    pub new_path: Option<String>,
}

impl FileManagerArgs {
    pub fn from_args(args: &Value) -> Self {
        Self {
            command: str_arg(args, "command").map(str::to_string),
            path: str_arg(args, "path").map(str::to_string),
            new_path: str_arg(args, "new_path").map(str::to_string),
        }
    }
}
