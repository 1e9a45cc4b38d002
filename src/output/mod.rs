pub mod table;

pub use table::render_table;

use crate::core::check::types::CheckOutcome;

/// Serialize the outcomes as a pretty-printed JSON array.
pub fn render_json(outcomes: &[CheckOutcome]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcomes)
}
