use crate::domain::point::{Locatable, Point};
use crate::interception::{AccessError, Grants, Interceptors, Member, Privilege, Slot, tag_param};
use annotation_macros::log_params;
use std::fmt::{Debug, Display};

const TRAIL: &str = "Trail";

const COORDINATES: Member = Member::new(TRAIL, "coordinates").requires(&[Privilege::ReadCoordinates]);
const SET_COORDINATES: Member = Member::new(TRAIL, "coordinates").requires(&[Privilege::WriteCoordinates]);
const ADD: Member = Member::new(TRAIL, "add").requires(&[Privilege::AddPoints]).log_params();
const TOTAL_DISTANCE: Member = Member::new(TRAIL, "total_distance").requires(&[Privilege::GetDistance]);

/// An ordered sequence of locations, in insertion order.
#[derive(Debug)]
#[log_params(add = 0)]
pub struct Trail<P = Point> {
    coordinates: Box<dyn Slot<Vec<P>>>,
    interceptors: Interceptors,
}

impl<P> Trail<P>
where
    P: Locatable + Display + Debug + Send + Sync + 'static,
{
    pub fn new(interceptors: Interceptors) -> Self {
        interceptors.instance_created(TRAIL, &[]);

        Trail {
            coordinates: interceptors.property(TRAIL, "coordinates", Vec::new()),
            interceptors,
        }
    }

    pub fn coordinates(&self, grants: &Grants) -> Result<&[P], AccessError> {
        COORDINATES.before_call(&self.interceptors, grants, &[])?;
        Ok(self.coordinates.get().as_slice())
    }

    pub fn set_coordinates(&mut self, grants: &Grants, coordinates: Vec<P>) -> Result<(), AccessError> {
        SET_COORDINATES.before_call(&self.interceptors, grants, &[])?;
        self.coordinates.set(coordinates);
        Ok(())
    }

    pub fn add(&mut self, grants: &Grants, point: P) -> Result<&mut Self, AccessError> {
        ADD.before_call(&self.interceptors, grants, &[&point])?;
        self.coordinates.get_mut().push(point);
        Ok(self)
    }

    /// Checks whether `grants` allow `add` without adding anything.
    pub fn authorize_add(&self, grants: &Grants) -> Result<(), AccessError> {
        ADD.authorize(grants)
    }

    /// Sum of the distances between consecutive points, 0 for fewer than two points.
    pub fn total_distance(&self, grants: &Grants) -> Result<f64, AccessError> {
        TOTAL_DISTANCE.invoke(&self.interceptors, grants, &[], || {
            self.coordinates
                .get()
                .windows(2)
                .map(|pair| pair[1].location().distance_to(&pair[0].location()))
                .sum()
        })
    }
}
