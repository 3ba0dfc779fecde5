//! Data model for the persisted workout document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single day's workout record.
///
/// Sessions are open-ended JSON objects supplied by the client. The only
/// field the backend interprets is `completed`; everything else (exercise
/// log, notes, ...) is opaque payload stored and returned unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(pub Map<String, Value>);

impl Session {
    /// Whether this session was completed. Absent or non-boolean is `false`.
    pub fn completed(&self) -> bool {
        self.0
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// True for the empty session returned for unknown dates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The root persisted object: every recorded session keyed by ISO calendar
/// date (`"2024-03-01"`), plus the single next planned workout.
///
/// The session map is ordered, so documents serialize in natural date order.
/// Date keys are not validated on write; a malformed key simply never matches
/// a real calendar date during stats computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub sessions: BTreeMap<String, Session>,
    #[serde(default)]
    pub plan: Option<Session>,
}

impl Document {
    /// Look up the session for a date key, empty if none was recorded.
    pub fn session(&self, date_key: &str) -> Session {
        self.sessions.get(date_key).cloned().unwrap_or_default()
    }

    /// Replace the session for a date key. Existing fields are not merged.
    pub fn set_session(&mut self, date_key: impl Into<String>, session: Session) {
        self.sessions.insert(date_key.into(), session);
    }

    /// The current plan, empty if none has been posted yet.
    pub fn plan(&self) -> Session {
        self.plan.clone().unwrap_or_default()
    }

    /// Replace the plan wholesale. No history is kept.
    pub fn set_plan(&mut self, plan: Session) {
        self.plan = Some(plan);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(value: Value) -> Session {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn completed_defaults_to_false() {
        assert!(!Session::default().completed());
        assert!(!session(json!({"notes": "rest day"})).completed());
    }

    #[test]
    fn completed_requires_a_boolean_true() {
        assert!(session(json!({"completed": true})).completed());
        assert!(!session(json!({"completed": false})).completed());
        assert!(!session(json!({"completed": "yes"})).completed());
        assert!(!session(json!({"completed": 1})).completed());
    }

    #[test]
    fn unknown_date_yields_empty_session() {
        let doc = Document::default();
        assert!(doc.session("2024-03-01").is_empty());
        assert!(doc.session("not-a-date").is_empty());
    }

    #[test]
    fn set_session_replaces_without_merging() {
        let mut doc = Document::default();
        doc.set_session("2024-01-01", session(json!({"a": 1})));
        doc.set_session("2024-01-01", session(json!({"b": 2})));

        assert_eq!(doc.session("2024-01-01"), session(json!({"b": 2})));
    }

    #[test]
    fn set_plan_replaces_wholesale() {
        let mut doc = Document::default();
        assert!(doc.plan().is_empty());

        doc.set_plan(session(json!({"focus": "legs", "exercises": ["squat"]})));
        doc.set_plan(session(json!({"focus": "push"})));

        assert_eq!(doc.plan(), session(json!({"focus": "push"})));
    }

    #[test]
    fn opaque_session_fields_round_trip() {
        let raw = json!({
            "completed": true,
            "exerciseLog": ["Back Squats: 3x5 135 lbs"],
            "notes": "felt strong"
        });
        let s = session(raw.clone());

        assert_eq!(serde_json::to_value(&s).unwrap(), raw);
    }
}
