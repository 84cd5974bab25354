//! Process configuration from environment variables.

use std::env;

/// Deployment mode. The swagger routes are mounted only in `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `APP_ENV=production` selects `Production`; anything else, including
    /// an unset variable, is `Development`.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Everything the binary reads from its environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
}

impl Config {
    /// Read `PORT` (default 3000) and `APP_ENV`. A `PORT` that does not
    /// parse falls back to the default rather than failing startup.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        Self {
            port,
            environment: Environment::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_is_the_default_environment() {
        // Only meaningful when APP_ENV is unset in the test environment,
        // which is the normal case for `cargo test`.
        if std::env::var("APP_ENV").is_err() {
            assert!(Environment::from_env().is_development());
        }
    }

    #[test]
    fn production_is_not_development() {
        assert!(!Environment::Production.is_development());
    }
}
