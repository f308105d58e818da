//! CLI configuration parsed from environment variables.

use canvas::config::EngineConfig;
use tracing::Level;

pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub log_level: Level,
}

impl AppConfig {
    /// Build config from environment variables. Unset or unparsable values
    /// keep the engine defaults.
    ///
    /// Optional:
    /// - `SLIDECRAFT_MIN_SIZE`: size floor, default 20
    /// - `SLIDECRAFT_SLIDE_EXTENT`: position clamp, default 2000
    /// - `SLIDECRAFT_ROTATION_SNAP_DEG`: default 15
    /// - `SLIDECRAFT_SKEW_PX_PER_DEGREE`: default 10
    /// - `SLIDECRAFT_NUDGE_STEP`: default 1
    /// - `SLIDECRAFT_NUDGE_STEP_LARGE`: default 10
    /// - `SLIDECRAFT_LOG`: `error`, `warn`, `info` (default), `debug` or `trace`
    #[must_use]
    pub fn from_env() -> Self {
        let d = EngineConfig::default();
        let engine = EngineConfig {
            min_size: env_parse("SLIDECRAFT_MIN_SIZE", d.min_size),
            slide_extent: env_parse("SLIDECRAFT_SLIDE_EXTENT", d.slide_extent),
            rotation_snap_deg: env_parse("SLIDECRAFT_ROTATION_SNAP_DEG", d.rotation_snap_deg),
            skew_px_per_degree: env_parse("SLIDECRAFT_SKEW_PX_PER_DEGREE", d.skew_px_per_degree),
            nudge_step: env_parse("SLIDECRAFT_NUDGE_STEP", d.nudge_step),
            nudge_step_large: env_parse("SLIDECRAFT_NUDGE_STEP_LARGE", d.nudge_step_large),
            ..d
        };
        let log_level = env_parse("SLIDECRAFT_LOG", DEFAULT_LOG_LEVEL);
        Self { engine, log_level }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
