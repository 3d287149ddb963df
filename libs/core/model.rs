use serde_derive::{Deserialize, Serialize};
use tally_storage::Record;

pub type ActivityId = String;
pub type TimeLogId = String;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Time,
    Completion,
}

impl std::str::FromStr for ActivityKind {
    type Err = eyre::Error;

    fn from_str(value: &str) -> eyre::Result<Self> {
        match value {
            "time" => Ok(Self::Time),
            "completion" => Ok(Self::Completion),
            other => Err(eyre::eyre!("unknown activity kind '{other}'")),
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Completion => write!(f, "completion"),
        }
    }
}

/// A tracked habit or task. Persisted field names stay camelCase, the wire
/// format predates this implementation.
///
/// `avg_hours_per_day` is only meaningful for `time` activities and
/// `target_per_week` only for `completion` ones; this layer stores whatever
/// it is given and leaves that rule to the caller.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub activity_type: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hours_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_per_week: Option<u32>,
    /// ISO date string, start_date <= end_date expected but not enforced
    pub start_date: String,
    pub end_date: String,
}

/// One dated observation against an activity. `activity_id` is not checked
/// against the activities collection; readers have to tolerate dangling
/// references.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: TimeLogId,
    pub activity_id: ActivityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub date: String,
}

impl Record for Activity {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for TimeLog {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_storage::assert_value_eq_json;

    #[test]
    fn activity_wire_format_is_camel_case() {
        let activity = Activity {
            id: "a1".to_owned(),
            name: "Read".to_owned(),
            activity_type: ActivityKind::Time,
            avg_hours_per_day: Some(1.5),
            target_per_week: None,
            start_date: "2024-01-01".to_owned(),
            end_date: "2024-12-31".to_owned(),
        };

        assert_value_eq_json!(activity, {
            "id": "a1",
            "name": "Read",
            "activityType": "time",
            "avgHoursPerDay": 1.5,
            "startDate": "2024-01-01",
            "endDate": "2024-12-31"
        });
    }

    #[test]
    fn completion_log_wire_format() {
        let log = TimeLog {
            id: "l1".to_owned(),
            activity_id: "a1".to_owned(),
            hours_spent: None,
            completed: Some(true),
            count: Some(3),
            date: "2024-03-05".to_owned(),
        };

        assert_value_eq_json!(log, {
            "id": "l1",
            "activityId": "a1",
            "completed": true,
            "count": 3,
            "date": "2024-03-05"
        });
    }

    #[test]
    fn old_schema_activity_does_not_decode() {
        // The pre-discriminator schema always carried avgHoursPerDay and
        // never activityType; such records fail to decode and the store
        // layer treats the whole collection as absent.
        let old = r#"[{"id":"a1","name":"Read","avgHoursPerDay":1,"startDate":"2024-01-01","endDate":"2024-12-31"}]"#;

        assert!(serde_json::from_str::<Vec<Activity>>(old).is_err());
    }

    #[test]
    fn dangling_activity_reference_still_decodes() {
        let log: TimeLog = serde_json::from_str(
            r#"{"id":"l1","activityId":"gone","hoursSpent":2.0,"date":"2024-03-05"}"#,
        )
        .unwrap();

        assert_eq!(log.activity_id, "gone");
        assert_eq!(log.completed, None);
    }
}
