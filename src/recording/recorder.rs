use crate::app_config::Recording;
use crate::domain::{Locatable, Trail};
use crate::interception::{AccessError, Grants};
use crate::recording::LocationSource;
use std::fmt::{Debug, Display};
use std::time::Duration;
use tokio::time::interval;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;
use tracing::{debug, info, instrument};

/// Records a trail by sampling a location source at a fixed interval.
#[derive(Clone, Debug)]
pub struct TrailRecorder {
    interval: Duration,
    max_samples: usize,
}

impl TrailRecorder {
    pub fn new(interval: Duration, max_samples: usize) -> Self {
        TrailRecorder { interval, max_samples }
    }

    pub fn from_config(config: &Recording) -> Self {
        TrailRecorder::new(config.interval(), config.max_samples())
    }

    /// Appends up to `max_samples` locations to `trail` and returns how many were recorded.
    #[instrument(skip_all, fields(max_samples = self.max_samples))]
    pub async fn record<P, S>(&self, trail: &mut Trail<P>, grants: &Grants, source: &mut S) -> Result<usize, AccessError>
    where
        P: Locatable + Display + Debug + Send + Sync + 'static,
        S: LocationSource<P> + ?Sized,
    {
        trail.authorize_add(grants)?;

        info!("📍 Recording trail...");
        // A zero period makes tokio's interval panic
        let period = self.interval.max(Duration::from_millis(1));
        let mut ticks = IntervalStream::new(interval(period)).take(self.max_samples);

        let mut recorded = 0;
        while ticks.next().await.is_some() {
            let Some(location) = source.current_location().await else {
                debug!("📍 Location source has no more locations");
                break;
            };

            trail.add(grants, location)?;
            recorded += 1;
        }

        info!(recorded, "📍 Recording trail... OK");
        Ok(recorded)
    }
}
