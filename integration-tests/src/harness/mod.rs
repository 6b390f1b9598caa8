mod logs;
pub mod tracing;

pub use logs::{LogWorkspace, access_line};
pub use tracing::{CapturedEvent, capture_events};
