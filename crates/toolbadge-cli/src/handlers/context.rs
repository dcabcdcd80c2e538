use crate::presentation::RenderOptions;
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Output settings shared by every handler
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: RenderOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, options: RenderOptions) -> Self {
        Self { format, options }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Single-line JSON, for output consumed line by line
    pub fn print_json_line<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }
}
