use std::fmt;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Latitude and longitude, stored as `[lat, lng]`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "running" => Some(WorkoutType::Running),
            "cycling" => Some(WorkoutType::Cycling),
            _ => None,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part of a workout that depends on its type. Serialized inline with the
/// workout and tagged by `"type"`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// Steps per minute
        cadence: f64,
        /// km/h
        #[serde(default)]
        pace: f64,
    },
    Cycling {
        /// Meters
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// km/h
        #[serde(default)]
        speed: f64,
    },
}

/// A displayable value with its unit and icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: String,
    date: DateTime<Utc>,
    coords: Coords,
    /// km
    distance: f64,
    /// Minutes
    duration: f64,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    /// `date` is the user's local time; the calendar day in the description
    /// is taken from it.
    pub fn running(distance: f64, duration: f64, coords: Coords, cadence: f64, date: DateTime<FixedOffset>) -> Self {
        Self::new(distance, duration, coords, WorkoutKind::Running { cadence, pace: 0. }, date)
    }

    pub fn cycling(distance: f64, duration: f64, coords: Coords, elevation_gain: f64, date: DateTime<FixedOffset>) -> Self {
        Self::new(distance, duration, coords, WorkoutKind::Cycling { elevation_gain, speed: 0. }, date)
    }

    fn new(distance: f64, duration: f64, coords: Coords, kind: WorkoutKind, date: DateTime<FixedOffset>) -> Self {
        let mut workout = Self {
            id: date.timestamp_millis().to_string(),
            date: date.with_timezone(&Utc),
            coords,
            distance,
            duration,
            description: describe(kind_type(&kind), &date),
            kind,
        };

        workout.recompute_derived();
        workout
    }

    /// Derives pace or speed from distance and duration, both in km/h, and
    /// the description when it is missing.
    pub fn recompute_derived(&mut self) {
        let km_per_hour = self.distance / (self.duration / 60.);
        match &mut self.kind {
            WorkoutKind::Running { pace, .. } => *pace = km_per_hour,
            WorkoutKind::Cycling { speed, .. } => *speed = km_per_hour,
        }

        if self.description.is_empty() {
            self.description = describe(self.workout_type(), &self.date.with_timezone(&Local));
        }
    }

    /// True when every number is finite and distance and duration are above
    /// zero. Anything else cannot be stored as JSON without losing values.
    pub fn is_sound(&self) -> bool {
        let (metric, rate) = match self.kind {
            WorkoutKind::Running { cadence, pace } => (cadence, pace),
            WorkoutKind::Cycling { elevation_gain, speed } => (elevation_gain, speed),
        };

        self.distance > 0.
            && self.duration > 0.
            && [self.coords.0, self.coords.1, self.distance, self.duration, metric, rate]
                .iter()
                .all(|v| v.is_finite())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        kind_type(&self.kind)
    }

    /// Pace for runs, speed for rides.
    pub fn rate(&self) -> Stat {
        match self.kind {
            WorkoutKind::Running { pace, .. } => Stat { icon: "⚡️", value: pace, unit: "km/h" },
            WorkoutKind::Cycling { speed, .. } => Stat { icon: "⚡️", value: speed, unit: "km/h" },
        }
    }

    /// Cadence for runs, elevation gain for rides.
    pub fn metric(&self) -> Stat {
        match self.kind {
            WorkoutKind::Running { cadence, .. } => Stat { icon: "🦶🏼", value: cadence, unit: "spm" },
            WorkoutKind::Cycling { elevation_gain, .. } => Stat { icon: "⛰", value: elevation_gain, unit: "m" },
        }
    }

    pub fn popup_text(&self) -> String {
        format!("{} {}", self.workout_type().icon(), self.description)
    }
}

fn kind_type(kind: &WorkoutKind) -> WorkoutType {
    match kind {
        WorkoutKind::Running { .. } => WorkoutType::Running,
        WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
    }
}

fn describe<Tz: TimeZone>(workout_type: WorkoutType, date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("{} on {}", workout_type.label(), date.format("%B %-d"))
}
