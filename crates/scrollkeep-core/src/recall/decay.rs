use tracing::warn;

use crate::time::days_between;

/// Exponential relevance falloff since last access.
///
/// `exp(-gamma * max(0, days))`. Unparsable timestamps fail open to 1.0 so a
/// malformed record degrades ranking instead of blocking recall.
pub fn temporal_decay(last_accessed: &str, current_time: &str, gamma_decay: f64) -> f64 {
    match days_between(last_accessed, current_time) {
        Some(days) => (-gamma_decay * days.max(0.0)).exp(),
        None => {
            warn!(last_accessed, current_time, "unparsable timestamp, decay disabled");
            1.0
        }
    }
}
