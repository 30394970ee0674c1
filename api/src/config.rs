use std::env;
use std::str::FromStr;

use anyhow::{bail, Context};

/// Smallest boundary that still encloses an area
pub const GEOMETRIC_MIN_POINTS: usize = 3;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Minimum number of boundary points accepted on create/update
    pub min_boundary_points: usize,
    /// Create the properties table at startup if it is missing
    pub auto_migrate: bool,
    /// Write routes: sustained requests per second per peer IP
    pub rate_limit_per_second: u64,
    /// Write routes: burst size per peer IP
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("PORT", 8080)?,
            min_boundary_points: parse_var("MIN_BOUNDARY_POINTS", GEOMETRIC_MIN_POINTS)?,
            auto_migrate: parse_var("AUTO_MIGRATE", true)?,
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND", 2)?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 5)?,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.min_boundary_points < GEOMETRIC_MIN_POINTS {
            bail!(
                "MIN_BOUNDARY_POINTS must be at least {}, got {}",
                GEOMETRIC_MIN_POINTS,
                self.min_boundary_points
            );
        }
        if self.rate_limit_per_second == 0 || self.rate_limit_burst == 0 {
            bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be positive");
        }
        Ok(())
    }
}

/// Read an optional env var, falling back to `default` when unset
fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}={:?}: {}", name, raw, e)),
        Err(_) => Ok(default),
    }
}
