use crate::interception::{Grants, Privilege};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    observability: Observability,
    access: Access,
    input: Input,
    recording: Recording,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("WAYPOINT").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn observability(&self) -> &Observability {
        &self.observability
    }

    pub fn access(&self) -> &Access {
        &self.access
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }
}

#[derive(Debug, Deserialize)]
pub struct Observability {
    enabled: bool,
}

impl Observability {
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Deserialize)]
pub struct Access {
    grants: Vec<Privilege>,
}

impl Access {
    pub fn grants(&self) -> Grants {
        self.grants.iter().copied().collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct Input {
    path: String,
}

impl Input {
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }
}

#[derive(Debug, Deserialize)]
pub struct Recording {
    #[serde(with = "humantime_serde")]
    interval: Duration,
    max_samples: usize,
}

impl Recording {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_samples(&self) -> usize {
        self.max_samples
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                observability: Observability { enabled: false },
                access: Access {
                    grants: vec![
                        Privilege::ReadCoordinates,
                        Privilege::WriteCoordinates,
                        Privilege::AddPoints,
                        Privilege::GetDistance,
                    ],
                },
                input: Input {
                    path: "input.txt".to_string(),
                },
                recording: Recording {
                    interval: Duration::from_millis(1),
                    max_samples: 3,
                },
            },
        }
    }

    pub fn observability(mut self, enabled: bool) -> Self {
        self.config.observability.enabled = enabled;
        self
    }

    pub fn grants(mut self, grants: Vec<Privilege>) -> Self {
        self.config.access.grants = grants;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
