mod location_source;
mod recorder;

pub use location_source::{FnSource, LocationSource};
pub use recorder::TrailRecorder;
