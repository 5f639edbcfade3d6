//! Session-scoped event ids.
//!
//! Ids look like `evt-1761728400000-3f9a1c2b7`: a millisecond timestamp that
//! never goes backwards within the process, then a random suffix. They are
//! unique within one process but are neither globally unique nor
//! unpredictable; ids never leave the client session.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

const ID_PREFIX: &str = "evt";
const SUFFIX_LEN: usize = 9;

static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Current wall-clock milliseconds, clamped so successive calls never
/// decrease even if the system clock steps back.
fn monotonic_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_MILLIS.fetch_max(now, Ordering::Relaxed);
    previous.max(now)
}

/// Generate a new event id.
pub fn generate_event_id() -> String {
    let millis = monotonic_millis();
    let random = Uuid::new_v4().simple().to_string();
    format!("{ID_PREFIX}-{millis}-{}", &random[..SUFFIX_LEN])
}
