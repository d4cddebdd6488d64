use crate::domain::point::{Locatable, Point};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A point observed at a moment in time, at a height in meters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Observation {
    #[serde(flatten)]
    point: Point,
    timestamp: DateTime<Utc>,
    height: f64,
}

impl Observation {
    pub fn new(x: f64, y: f64, timestamp: DateTime<Utc>, height: f64) -> Self {
        Observation {
            point: Point::new(x, y),
            timestamp,
            height,
        }
    }
}

impl Locatable for Observation {
    fn location(&self) -> Point {
        self.point
    }
}

impl Display for Observation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Observation from: {}, at location: ({}, {}), at the height of: {} m.",
            self.timestamp,
            self.point.x(),
            self.point.y(),
            self.height
        )
    }
}
