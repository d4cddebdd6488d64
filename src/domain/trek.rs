use crate::domain::observation::Observation;
use crate::domain::trail::Trail;
use crate::domain::waypoint::{TrailError, Waypoint};
use crate::interception::{AccessError, Grants, Interceptors};

const TREK: &str = "Trek";

/// A trail made of observations only.
#[derive(Debug)]
pub struct Trek {
    trail: Trail<Observation>,
}

impl Trek {
    pub fn new(interceptors: Interceptors) -> Self {
        interceptors.instance_created(TREK, &[]);
        Trek {
            trail: Trail::new(interceptors),
        }
    }

    pub fn coordinates(&self, grants: &Grants) -> Result<&[Observation], AccessError> {
        self.trail.coordinates(grants)
    }

    pub fn set_coordinates(&mut self, grants: &Grants, coordinates: Vec<Observation>) -> Result<(), AccessError> {
        self.trail.set_coordinates(grants, coordinates)
    }

    pub fn add(&mut self, grants: &Grants, observation: Observation) -> Result<&mut Self, AccessError> {
        self.trail.add(grants, observation)?;
        Ok(self)
    }

    /// Adds a waypoint whose type is only known at runtime. Anything but an observation is rejected before the
    /// privilege check.
    pub fn add_waypoint(&mut self, grants: &Grants, waypoint: Waypoint) -> Result<&mut Self, TrailError> {
        let observation = Observation::try_from(waypoint)?;
        Ok(self.add(grants, observation)?)
    }

    pub fn total_distance(&self, grants: &Grants) -> Result<f64, AccessError> {
        self.trail.total_distance(grants)
    }

    pub fn trail_mut(&mut self) -> &mut Trail<Observation> {
        &mut self.trail
    }
}
