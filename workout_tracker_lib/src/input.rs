use chrono::{DateTime, FixedOffset};

use crate::{
    error::WorkoutError,
    workout::{Coords, Workout, WorkoutType},
};

/// Raw values of the entry form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutInput {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl WorkoutInput {
    /// Builds a workout located at `coords`. Every field the selected type
    /// needs must be a finite number above zero.
    pub fn parse(&self, coords: Coords, date: DateTime<FixedOffset>) -> Result<Workout, WorkoutError> {
        let distance = positive("distance", &self.distance)?;
        let duration = positive("duration", &self.duration)?;

        match self.workout_type {
            WorkoutType::Running => {
                let cadence = positive("cadence", &self.cadence)?;
                Ok(Workout::running(distance, duration, coords, cadence, date))
            }
            WorkoutType::Cycling => {
                let elevation = positive("elevation", &self.elevation)?;
                Ok(Workout::cycling(distance, duration, coords, elevation, date))
            }
        }
    }

    /// Empties all inputs, keeping the selected type.
    pub fn clear(&mut self) {
        *self = Self {
            workout_type: self.workout_type,
            ..Default::default()
        };
    }
}

fn positive(field: &'static str, raw: &str) -> Result<f64, WorkoutError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0. => Ok(value),
        _ => Err(WorkoutError::InvalidInput { field }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::workout::WorkoutKind;

    fn input(workout_type: WorkoutType, distance: &str, duration: &str, cadence: &str, elevation: &str) -> WorkoutInput {
        WorkoutInput {
            workout_type,
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            elevation: elevation.into(),
        }
    }

    fn now() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap().fixed_offset()
    }

    #[test]
    fn valid_running_input() {
        let workout = input(WorkoutType::Running, " 10 ", "50", "170", "")
            .parse(Coords(1., 2.), now())
            .unwrap();

        assert_eq!(workout.distance(), 10.);
        assert_eq!(workout.coords(), Coords(1., 2.));
        assert!(matches!(workout.kind(), WorkoutKind::Running { cadence, .. } if *cadence == 170.));
    }

    #[test]
    fn cycling_ignores_cadence_field() {
        let workout = input(WorkoutType::Cycling, "25", "60", "not a number", "300")
            .parse(Coords(1., 2.), now())
            .unwrap();

        assert!(matches!(workout.kind(), WorkoutKind::Cycling { elevation_gain, .. } if *elevation_gain == 300.));
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        let cases = [
            input(WorkoutType::Running, "0", "50", "170", ""),
            input(WorkoutType::Running, "5", "-3", "170", ""),
            input(WorkoutType::Running, "5", "30", "", ""),
            input(WorkoutType::Running, "inf", "30", "170", ""),
            input(WorkoutType::Running, "NaN", "30", "170", ""),
            input(WorkoutType::Cycling, "20", "60", "", "-10"),
        ];

        for case in cases {
            assert!(matches!(case.parse(Coords(0., 0.), now()), Err(WorkoutError::InvalidInput { .. })), "{case:?}");
        }
    }

    #[test]
    fn error_names_the_first_bad_field() {
        let err = input(WorkoutType::Cycling, "20", "abc", "", "x").parse(Coords(0., 0.), now()).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput { field: "duration" }));
        assert_eq!(err.to_string(), "duration has to be a positive number");
    }

    #[test]
    fn clear_keeps_type() {
        let mut form = input(WorkoutType::Cycling, "20", "60", "", "100");
        form.clear();
        assert_eq!(form, WorkoutInput { workout_type: WorkoutType::Cycling, ..Default::default() });
    }
}
