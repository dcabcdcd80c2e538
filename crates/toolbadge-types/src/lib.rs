pub mod error;
pub mod invocation;
pub mod tool;
mod util;

pub use error::{Error, Result};
pub use invocation::*;
pub use tool::*;
pub use util::*;
