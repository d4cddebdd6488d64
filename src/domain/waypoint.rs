use crate::domain::observation::Observation;
use crate::domain::point::Point;
use crate::interception::AccessError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A trail input whose concrete type is only known at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Waypoint {
    Point(Point),
    Observation(Observation),
}

impl Waypoint {
    pub fn kind(&self) -> &'static str {
        match self {
            Waypoint::Point(_) => "Point",
            Waypoint::Observation(_) => "Observation",
        }
    }
}

impl From<Point> for Waypoint {
    fn from(point: Point) -> Self {
        Waypoint::Point(point)
    }
}

impl From<Observation> for Waypoint {
    fn from(observation: Observation) -> Self {
        Waypoint::Observation(observation)
    }
}

impl TryFrom<Waypoint> for Observation {
    type Error = TrailError;

    fn try_from(waypoint: Waypoint) -> Result<Self, Self::Error> {
        match waypoint {
            Waypoint::Observation(observation) => Ok(observation),
            other => Err(TrailError::TypeMismatch {
                expected: "Observation",
                found: other.kind(),
            }),
        }
    }
}

impl Display for Waypoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Waypoint::Point(point) => Display::fmt(point, f),
            Waypoint::Observation(observation) => Display::fmt(observation, f),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum TrailError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("expected a value of type '{expected}', found '{found}'")]
    TypeMismatch { expected: &'static str, found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn observations_convert_back_from_a_waypoint() {
        let observation = Observation::new(1.0, 2.0, Utc::now(), 300.0);

        let converted = Observation::try_from(Waypoint::from(observation.clone()));

        assert_eq!(converted, Ok(observation));
    }

    #[test]
    fn points_are_not_observations() {
        let converted = Observation::try_from(Waypoint::from(Point::new(1.0, 2.0)));

        assert_eq!(
            converted,
            Err(TrailError::TypeMismatch {
                expected: "Observation",
                found: "Point",
            })
        );
        assert_eq!(
            converted.unwrap_err().to_string(),
            "expected a value of type 'Observation', found 'Point'"
        );
    }

    #[test]
    fn display_shows_the_wrapped_value() {
        assert_eq!(Waypoint::from(Point::new(5.0, 6.0)).to_string(), "Point: (5, 6)");
    }
}
