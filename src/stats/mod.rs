//! Aggregate workout statistics
//!
//! Pure computation over a document's session map; no I/O. The caller
//! supplies "today" so results stay deterministic under test.

use chrono::NaiveDate;
use serde::Serialize;

use crate::store::{Document, Session};

/// How many consecutive days the streak walk may count. Sessions further
/// back never contribute, so no reported streak exceeds this.
const STREAK_LOOKBACK_DAYS: u32 = 60;

/// Aggregate totals derived from the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_workouts: usize,
    pub current_streak: u32,
}

/// Compute totals and the current streak as of `today`.
///
/// The streak walks backward one calendar day at a time. A completed session
/// extends it; a past day without one breaks it. Today itself gets a grace
/// allowance: an unfinished today neither extends nor breaks a streak built
/// on prior days, and does not use up any of the lookback window.
pub fn compute(doc: &Document, today: NaiveDate) -> Stats {
    let total_workouts = doc.sessions.values().filter(|s| s.completed()).count();

    let mut current_streak = 0;
    let mut day = today;
    let mut remaining = STREAK_LOOKBACK_DAYS;
    while remaining > 0 {
        let key = day.format("%Y-%m-%d").to_string();
        let completed = doc.sessions.get(&key).is_some_and(Session::completed);

        if completed {
            current_streak += 1;
            remaining -= 1;
        } else if day < today {
            break;
        }

        day = day - chrono::Duration::days(1);
    }

    Stats {
        total_workouts,
        current_streak,
    }
}
