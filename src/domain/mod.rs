mod observation;
mod point;
mod trail;
mod trek;
mod waypoint;

pub use observation::Observation;
pub use point::{Locatable, Point};
pub use trail::Trail;
pub use trek::Trek;
pub use waypoint::{TrailError, Waypoint};
