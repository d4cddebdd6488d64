use crate::app_config::AppConfig;
use crate::domain::{Observation, Point, Trail, TrailError, Trek, Waypoint};
use crate::interception::{Grants, Interceptors, TracingSink};
use crate::recording::{FnSource, TrailRecorder};
use crate::retrieval::{
    RetrievalError, read_text_blocking, read_text_chained, read_text_eager, read_text_logged, read_text_nested, read_text_sequential,
    read_text_with_callback,
};
use chrono::Utc;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

mod app_config;
mod domain;
mod interception;
mod recording;
mod retrieval;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(observability = config.observability().enabled(), "✅  Loaded configuration");

    let interceptors = Interceptors::new(config.observability().enabled(), Arc::new(TracingSink));
    let grants = config.access().grants();

    walk_trail(&interceptors, &grants)?;
    walk_trek(&interceptors, &grants)?;
    record_trek(&config, &interceptors, &grants).await?;
    read_input(config.input().path()).await?;

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn walk_trail(interceptors: &Interceptors, grants: &Grants) -> Result<(), Box<dyn Error>> {
    let mut trail = Trail::new(interceptors.clone());
    trail
        .add(grants, Point::ORIGIN)?
        .add(grants, Point::new(1.0, 1.0))?
        .add(grants, Point::new(2.0, 2.0))?;

    info!("🥾 Trail coordinates: {}", serde_json::to_string(trail.coordinates(grants)?)?);
    info!("🥾 Trail distance: {}", trail.total_distance(grants)?);

    trail.set_coordinates(grants, vec![Point::ORIGIN, Point::new(3.0, 4.0)])?;
    info!("🥾 Rerouted trail coordinates: {}", serde_json::to_string(trail.coordinates(grants)?)?);
    info!("🥾 Rerouted trail distance: {}", trail.total_distance(grants)?);
    Ok(())
}

fn walk_trek(interceptors: &Interceptors, grants: &Grants) -> Result<(), Box<dyn Error>> {
    let mut trek = Trek::new(interceptors.clone());
    trek.add(grants, Observation::new(0.0, 0.0, Utc::now(), 1000.0))?
        .add(grants, Observation::new(1.0, 1.0, Utc::now(), 2000.0))?
        .add(grants, Observation::new(2.0, 2.0, Utc::now(), 2000.0))?;

    match trek.add_waypoint(grants, Waypoint::from(Point::new(3.0, 3.0))) {
        Ok(_) => info!("🏔️ Trek accepted a waypoint"),
        Err(err @ TrailError::TypeMismatch { .. }) => warn!("⚠️ Trek rejected a waypoint: {}", err),
        Err(TrailError::Access(err)) => return Err(err.into()),
    }

    info!("🏔️ Trek coordinates: {}", serde_json::to_string(trek.coordinates(grants)?)?);
    info!("🏔️ Trek distance: {}", trek.total_distance(grants)?);
    Ok(())
}

async fn record_trek(config: &AppConfig, interceptors: &Interceptors, grants: &Grants) -> Result<(), Box<dyn Error>> {
    let mut trek = Trek::new(interceptors.clone());
    trek.set_coordinates(grants, vec![Observation::new(0.0, 0.0, Utc::now(), 100.0)])?;

    // Simulated hiker climbing along a straight line from the trailhead
    let mut step = 1.0;
    let mut source = FnSource::new(move || {
        let observation = Observation::new(step, step * 0.5, Utc::now(), 100.0 + step * 10.0);
        step += 1.0;
        Some(observation)
    });

    let recorded = TrailRecorder::from_config(config.recording())
        .record(trek.trail_mut(), grants, &mut source)
        .await?;

    info!(recorded, "📍 Recorded trek distance: {}", trek.total_distance(grants)?);
    Ok(())
}

async fn read_input(path: &Path) -> Result<(), Box<dyn Error>> {
    info!("📄 Blocking: {:?}", read_text_blocking(path));

    read_text_with_callback(path, |result| report("Callback", result)).await?;
    report("Eager", read_text_eager(path).await);
    report("Awaited", read_text_logged(path).await);

    read_text_nested(path, |result| report("Nested callbacks", result)).await?;
    report("Chained", read_text_chained(path).await);
    report("Sequential", read_text_sequential(path).await);
    Ok(())
}

fn report(variant: &str, result: Result<String, RetrievalError>) {
    match result {
        Ok(text) => info!("📄 {}: {:?}", variant, text),
        Err(err) => warn!("📄 {}: failed, {}", variant, err),
    }
}
