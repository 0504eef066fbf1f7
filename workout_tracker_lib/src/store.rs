use std::{cell::RefCell, collections::HashMap};

use crate::{error::WorkoutError, log::WorkoutLog};

pub const STORAGE_KEY: &str = "workouts";

/// A string key/value store, such as the browser's local storage.
pub trait WorkoutStore {
    fn get(&self, key: &str) -> Result<Option<String>, WorkoutError>;
    fn set(&self, key: &str, value: &str) -> Result<(), WorkoutError>;
    fn remove(&self, key: &str) -> Result<(), WorkoutError>;
}

pub fn save(store: &impl WorkoutStore, log: &WorkoutLog) -> Result<(), WorkoutError> {
    let json = serde_json::to_string(log)?;
    store.set(STORAGE_KEY, &json)
}

/// Returns an empty log when nothing has been saved yet. Records whose
/// numbers are not finite after re-deriving pace and speed are skipped.
pub fn load(store: &impl WorkoutStore) -> Result<WorkoutLog, WorkoutError> {
    let Some(json) = store.get(STORAGE_KEY)? else {
        return Ok(WorkoutLog::new());
    };

    let mut log: WorkoutLog = serde_json::from_str(&json)?;
    for workout in log.iter_mut() {
        workout.recompute_derived();
    }

    Ok(log.into_iter().filter(|w| w.is_sound()).collect())
}

pub fn clear(store: &impl WorkoutStore) -> Result<(), WorkoutError> {
    store.remove(STORAGE_KEY)
}

/// A store together with the outcome of reading it. Saving is refused when
/// the saved list could not be read, so it is never replaced by a partial one.
pub struct WorkoutRepository<S> {
    store: S,
    readable: bool,
}

impl<S: WorkoutStore> WorkoutRepository<S> {
    pub fn open(store: S) -> (Self, Result<WorkoutLog, WorkoutError>) {
        let loaded = load(&store);
        let repository = Self {
            store,
            readable: loaded.is_ok(),
        };
        (repository, loaded)
    }

    pub fn save(&self, log: &WorkoutLog) -> Result<(), WorkoutError> {
        if !self.readable {
            return Err(WorkoutError::Unreadable);
        }
        save(&self.store, log)
    }

    pub fn clear(&mut self) -> Result<(), WorkoutError> {
        clear(&self.store)?;
        self.readable = true;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl WorkoutStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WorkoutError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WorkoutError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), WorkoutError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::workout::{Coords, Workout, WorkoutKind, WorkoutType};

    #[test]
    fn missing_key_loads_empty_log() {
        let store = MemoryStore::default();
        assert!(load(&store).unwrap().is_empty());
    }

    #[test]
    fn saved_log_keeps_workout_types() {
        let store = MemoryStore::default();
        let date = Utc.with_ymd_and_hms(2025, 5, 22, 12, 9, 14).unwrap().fixed_offset();

        let mut log = WorkoutLog::new();
        log.push(Workout::running(5.2, 24., Coords(56.175188, 10.196123), 178., date));
        log.push(Workout::cycling(27., 95., Coords(56.2, 10.1), 223., date + chrono::Duration::minutes(5)));
        save(&store, &log).unwrap();

        let loaded = load(&store).unwrap();
        assert_eq!(loaded, log);

        let types: Vec<WorkoutType> = loaded.iter().map(|w| w.workout_type()).collect();
        assert_eq!(types, [WorkoutType::Running, WorkoutType::Cycling]);
    }

    #[test]
    fn loads_list_written_by_the_javascript_app() {
        let store = MemoryStore::default();
        let json = r#"[
            {"date":"2023-07-30T10:15:00.000Z","id":"1690712100000","coords":[51.5,-0.12],
             "duration":30,"distance":6,"type":"running","cadence":175,"pace":12,
             "description":"Running on July 30"},
            {"date":"2023-07-31T08:00:00.000Z","id":"1690790400000","coords":[51.4,-0.1],
             "duration":120,"distance":40,"type":"cycling","elevationGain":350,"speed":20,
             "description":"Cycling on July 31"}
        ]"#;
        store.set(STORAGE_KEY, json).unwrap();

        let log = load(&store).unwrap();
        assert_eq!(log.len(), 2);

        let run = log.find("1690712100000").unwrap();
        assert_eq!(run.description(), "Running on July 30");
        assert_eq!(run.coords(), Coords(51.5, -0.12));
        assert!(matches!(run.kind(), WorkoutKind::Running { pace, .. } if (*pace - 12.).abs() < 1e-9));

        let ride = log.find("1690790400000").unwrap();
        assert_eq!(ride.metric().value, 350.);
        assert_eq!(ride.rate().value, 20.);
    }

    #[test]
    fn missing_description_is_rebuilt() {
        let store = MemoryStore::default();
        store
            .set(
                STORAGE_KEY,
                r#"[{"date":"2024-03-09T10:00:00Z","id":"1","coords":[0,0],"duration":60,"distance":30,"type":"cycling","elevationGain":10}]"#,
            )
            .unwrap();

        let log = load(&store).unwrap();
        assert_eq!(log.find("1").unwrap().description(), "Cycling on March 9");
    }

    #[test]
    fn corrupt_data_is_an_error() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(load(&store), Err(WorkoutError::Serialization(_))));
    }

    #[test]
    fn records_with_zero_distance_are_skipped() {
        let store = MemoryStore::default();
        store
            .set(
                STORAGE_KEY,
                r#"[
                    {"date":"2024-03-09T10:00:00Z","id":"1","coords":[0,0],"duration":30,"distance":0,"type":"running","cadence":170},
                    {"date":"2024-03-10T10:00:00Z","id":"2","coords":[0,0],"duration":30,"distance":5,"type":"running","cadence":170}
                ]"#,
            )
            .unwrap();

        let log = load(&store).unwrap();
        assert_eq!(log.len(), 1);
        assert!(log.find("1").is_none());

        save(&store, &log).unwrap();
        assert!(!store.get(STORAGE_KEY).unwrap().unwrap().contains("null"));
        assert_eq!(load(&store).unwrap(), log);
    }

    #[test]
    fn unreadable_list_is_not_overwritten() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY, "{not json").unwrap();

        let (repository, loaded) = WorkoutRepository::open(store);
        assert!(loaded.is_err());

        let mut log = WorkoutLog::new();
        log.push(Workout::running(5., 30., Coords(0., 0.), 170., Utc::now().fixed_offset()));
        assert!(matches!(repository.save(&log), Err(WorkoutError::Unreadable)));
        assert_eq!(repository.store.get(STORAGE_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn repository_saves_after_clean_open_or_clear() {
        let (repository, loaded) = WorkoutRepository::open(MemoryStore::default());
        assert!(loaded.unwrap().is_empty());
        repository.save(&WorkoutLog::new()).unwrap();

        let broken = MemoryStore::default();
        broken.set(STORAGE_KEY, "[1, 2").unwrap();
        let (mut repository, _) = WorkoutRepository::open(broken);
        repository.clear().unwrap();
        repository.save(&WorkoutLog::new()).unwrap();
        assert_eq!(repository.store.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn clear_removes_saved_list() {
        let store = MemoryStore::default();
        save(&store, &WorkoutLog::new()).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_some());

        clear(&store).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_none());
    }
}
