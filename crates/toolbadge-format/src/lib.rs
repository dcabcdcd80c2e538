//! Display derivation for AI tool calls.
//!
//! Two pure functions do the work: [`format_message`] turns a
//! [`ToolInvocation`] into a short status line, and [`is_complete`] decides
//! whether it should be painted as pending or complete. [`Badge`] bundles
//! both for a rendering layer, and [`BadgeBoard`] tracks a set of records
//! keyed by `toolCallId` as the producer updates them.

pub mod badge;
pub mod board;
pub mod filename;
pub mod message;
pub mod status;

pub use badge::Badge;
pub use board::{BadgeBoard, BoardUpdate};
pub use filename::{filename, filename_of};
pub use message::{Description, describe, format_message};
pub use status::{BadgeStatus, is_complete, resolve_status};

pub use toolbadge_types::ToolInvocation;
