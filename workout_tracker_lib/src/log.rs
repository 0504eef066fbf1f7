use serde::{Deserialize, Serialize};

use crate::workout::Workout;

/// All workouts in the order they were added.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct WorkoutLog {
    workouts: Vec<Workout>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Workout> {
        self.workouts.iter()
    }

    /// Order used by the sidebar list.
    pub fn newest_first(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Workout> {
        self.workouts.iter_mut()
    }
}

impl FromIterator<Workout> for WorkoutLog {
    fn from_iter<T: IntoIterator<Item = Workout>>(iter: T) -> Self {
        Self {
            workouts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WorkoutLog {
    type Item = Workout;
    type IntoIter = std::vec::IntoIter<Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.workouts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::workout::Coords;

    fn run_at(secs: i64) -> Workout {
        let date = Utc.timestamp_opt(secs, 0).unwrap().fixed_offset();
        Workout::running(5., 30., Coords(0., 0.), 170., date)
    }

    #[test]
    fn find_by_id() {
        let log: WorkoutLog = [run_at(1), run_at(2), run_at(3)].into_iter().collect();

        assert_eq!(log.find("2000").map(|w| w.id()), Some("2000"));
        assert!(log.find("4000").is_none());
        assert!(log.find("").is_none());
    }

    #[test]
    fn newest_first_reverses_insertion_order() {
        let mut log = WorkoutLog::new();
        assert!(log.is_empty());
        log.push(run_at(1));
        log.push(run_at(2));

        let ids: Vec<&str> = log.newest_first().map(|w| w.id()).collect();
        assert_eq!(ids, ["2000", "1000"]);
        assert_eq!(log.len(), 2);
    }
}
