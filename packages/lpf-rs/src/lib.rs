pub mod types;
pub mod designer;
pub mod analysis;
pub mod format;
pub mod batch;
pub mod error;

pub use types::*;
pub use designer::design;
pub use batch::{design_batch, parse_requests, BatchOutcome};
pub use format::format_value;
pub use error::{LpfError, Result, ValidationError};
