use tally_storage::{CollectionStore, PersistenceAdapter};
use ulid::Ulid;

mod load;
pub mod model;

pub use load::{load, load_core};
pub use model::{Activity, ActivityId, ActivityKind, TimeLog, TimeLogId};

/// Storage keys of the two collections. With the file medium these become
/// `activities.json` and `logs.json` in the data directory.
pub const ACTIVITIES_KEY: &str = "activities";
pub const LOGS_KEY: &str = "logs";

/// Owns the two collection stores for the lifetime of the process. Both
/// stores are wired over the same persistence adapter but under their own
/// keys, so they never touch each other's persisted text.
pub struct Core {
    activities: CollectionStore<Activity>,
    logs: CollectionStore<TimeLog>,
    /// Ok - found | Err - not found with error reason
    found_config_file: Result<(), eyre::Error>,
}

pub struct CreateActivityInput {
    pub name: String,
    pub activity_type: ActivityKind,
    pub avg_hours_per_day: Option<f64>,
    pub target_per_week: Option<u32>,
    pub start_date: String,
    pub end_date: String,
}

pub struct RecordLogInput {
    pub activity_id: ActivityId,
    pub hours_spent: Option<f64>,
    pub completed: Option<bool>,
    pub count: Option<u32>,
    pub date: String,
}

impl Core {
    pub fn new(adapter: PersistenceAdapter) -> Self {
        Core {
            activities: CollectionStore::load(adapter.clone(), ACTIVITIES_KEY),
            logs: CollectionStore::load(adapter, LOGS_KEY),
            found_config_file: Ok(()),
        }
    }

    pub fn activities(&self) -> &CollectionStore<Activity> {
        &self.activities
    }

    pub fn logs(&self) -> &CollectionStore<TimeLog> {
        &self.logs
    }

    pub fn create_activity(&self, input: CreateActivityInput) -> Activity {
        let activity = Activity {
            id: Ulid::new().to_string(),
            name: input.name,
            activity_type: input.activity_type,
            avg_hours_per_day: input.avg_hours_per_day,
            target_per_week: input.target_per_week,
            start_date: input.start_date,
            end_date: input.end_date,
        };

        self.activities.push(activity.clone());
        activity
    }

    pub fn update_activity(&self, activity: Activity) -> eyre::Result<()> {
        let activity_id = activity.id.clone();
        if !self.activities.update_by_id(activity) {
            return Err(eyre::eyre!("no activity with id '{activity_id}'"));
        }
        Ok(())
    }

    pub fn delete_activity(&self, activity_id: &str) -> eyre::Result<()> {
        if !self.activities.remove_by_id(activity_id) {
            return Err(eyre::eyre!("no activity with id '{activity_id}'"));
        }
        Ok(())
    }

    pub fn record_log(&self, input: RecordLogInput) -> TimeLog {
        let log = TimeLog {
            id: Ulid::new().to_string(),
            activity_id: input.activity_id,
            hours_spent: input.hours_spent,
            completed: input.completed,
            count: input.count,
            date: input.date,
        };

        self.logs.push(log.clone());
        log
    }

    pub fn delete_log(&self, log_id: &str) -> eyre::Result<()> {
        if !self.logs.remove_by_id(log_id) {
            return Err(eyre::eyre!("no time log with id '{log_id}'"));
        }
        Ok(())
    }

    pub fn has_found_config_file(&self) -> &Result<(), eyre::Error> {
        &self.found_config_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_storage::medium::file::FileMedium;
    use tally_storage::medium::in_memory::InMemoryMedium;
    use tally_storage::{assert_value_eq_json, records_vec, MediumBox};

    fn in_memory_core() -> (Core, PersistenceAdapter) {
        let adapter = PersistenceAdapter::new(MediumBox::new(InMemoryMedium::default()));
        (Core::new(adapter.clone()), adapter)
    }

    #[test]
    fn appended_activity_reaches_storage_and_a_fresh_core() {
        let (core, adapter) = in_memory_core();

        core.activities().push(Activity {
            id: "a1".to_owned(),
            name: "Read".to_owned(),
            activity_type: ActivityKind::Time,
            avg_hours_per_day: Some(1.0),
            target_per_week: None,
            start_date: "2024-01-01".to_owned(),
            end_date: "2024-12-31".to_owned(),
        });

        let stored: serde_json::Value =
            serde_json::from_str(&adapter.read(ACTIVITIES_KEY).unwrap()).unwrap();
        assert_value_eq_json!(stored, [{
            "id": "a1",
            "name": "Read",
            "activityType": "time",
            "avgHoursPerDay": 1.0,
            "startDate": "2024-01-01",
            "endDate": "2024-12-31"
        }]);

        let reloaded = Core::new(adapter);
        let activities = reloaded.activities().get();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].id, "a1");
        assert_eq!(activities[0].name, "Read");
    }

    #[test]
    fn corrupt_logs_key_yields_empty_collection() {
        let adapter = PersistenceAdapter::new(MediumBox::new(InMemoryMedium::default()));
        adapter.write(LOGS_KEY, "not json");

        let core = Core::new(adapter);
        assert_eq!(core.logs().get(), vec![]);
    }

    #[test]
    fn collections_are_independent() {
        let (core, adapter) = in_memory_core();

        core.record_log(RecordLogInput {
            activity_id: "a1".to_owned(),
            hours_spent: Some(2.0),
            completed: None,
            count: None,
            date: "2024-03-05".to_owned(),
        });

        assert_eq!(adapter.read(ACTIVITIES_KEY), None);

        core.create_activity(CreateActivityInput {
            name: "Pushups".to_owned(),
            activity_type: ActivityKind::Completion,
            avg_hours_per_day: None,
            target_per_week: Some(5),
            start_date: "2024-01-01".to_owned(),
            end_date: "2024-12-31".to_owned(),
        });

        let logs_before = adapter.read(LOGS_KEY);
        let activity_id = core.activities().get()[0].id.clone();
        core.delete_activity(&activity_id).unwrap();
        assert_eq!(adapter.read(LOGS_KEY), logs_before);
    }

    #[test]
    fn created_records_get_unique_ids() {
        let (core, _adapter) = in_memory_core();

        for _ in 0..5 {
            core.create_activity(CreateActivityInput {
                name: "Read".to_owned(),
                activity_type: ActivityKind::Time,
                avg_hours_per_day: Some(1.0),
                target_per_week: None,
                start_date: "2024-01-01".to_owned(),
                end_date: "2024-12-31".to_owned(),
            });
        }

        let mut ids: Vec<ActivityId> =
            core.activities().get().into_iter().map(|a| a.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn update_and_delete_of_unknown_ids_fail() {
        let (core, _adapter) = in_memory_core();

        assert!(core.delete_activity("missing").is_err());
        assert!(core.delete_log("missing").is_err());

        let ghost = records_vec!(Activity, [{
            "id": "missing",
            "name": "Ghost",
            "activityType": "time",
            "startDate": "2024-01-01",
            "endDate": "2024-12-31"
        }])
        .remove(0);
        assert!(core.update_activity(ghost).is_err());
    }

    #[test]
    fn state_survives_process_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        {
            let adapter =
                PersistenceAdapter::new(MediumBox::new(FileMedium::new(dir.path())));
            let core = Core::new(adapter);
            core.create_activity(CreateActivityInput {
                name: "Read".to_owned(),
                activity_type: ActivityKind::Time,
                avg_hours_per_day: Some(1.0),
                target_per_week: None,
                start_date: "2024-01-01".to_owned(),
                end_date: "2024-12-31".to_owned(),
            });
        }

        let adapter = PersistenceAdapter::new(MediumBox::new(FileMedium::new(dir.path())));
        let core = Core::new(adapter);
        let activities = core.activities().get();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Read");
    }
}
