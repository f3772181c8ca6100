use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Config {
    /// Address the HTTP server binds, e.g. `127.0.0.1:3000`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Directory the built SPA is served from as the route fallback.
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_url() -> String {
    "127.0.0.1:3000".to_owned()
}

fn default_frontend_dir() -> String {
    "frontend".to_owned()
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Extract(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(self, f)
    }
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file("ministry-match.toml"))
        .merge(Env::prefixed("MINISTRY_MATCH_"))
        .extract()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_any_configuration() {
        figment::Jail::expect_with(|_jail| {
            let config = get_config().unwrap();
            assert_eq!(config.url, "127.0.0.1:3000");
            assert_eq!(config.frontend_dir, "frontend");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_the_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "ministry-match.toml",
                r#"
                url = "0.0.0.0:8080"
                frontend_dir = "dist"
                "#,
            )?;
            jail.set_env("MINISTRY_MATCH_URL", "127.0.0.1:9999");
            let config = get_config().unwrap();
            assert_eq!(config.url, "127.0.0.1:9999");
            assert_eq!(config.frontend_dir, "dist");
            Ok(())
        });
    }
}
