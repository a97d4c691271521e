//! Configuration for the storefront.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. `storefront.{yaml,toml,json}` in the working directory (if present)
//! 3. The file passed to [`StoreConfig::load`] (must exist)
//! 4. `STOREFRONT__*` environment variables, `__` separating nested keys
//!    (e.g. `STOREFRONT__TICK_INTERVAL_MS=200`, `STOREFRONT__PROFILE__NAME=Alice`)

use super::SystemError;
use crate::model::UserProfile;
use crate::storefront_actor::OrderSettings;
use serde::Deserialize;
use std::time::Duration;

/// Base name of the optional config file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "storefront";

/// Prefix for environment overrides.
pub const CONFIG_ENV_PREFIX: &str = "STOREFRONT";

/// Top-level storefront configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the storefront command channel.
    pub buffer_size: usize,
    /// Delay between two progress ticks.
    pub tick_interval_ms: u64,
    pub estimated_minutes: u32,
    /// Shown until a courier is assigned.
    pub courier_name: String,
    pub courier_vehicle: String,
    /// Prefix of generated order ids.
    pub order_id_prefix: String,
    pub profile: ProfileConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let settings = OrderSettings::default();
        Self {
            buffer_size: 32,
            tick_interval_ms: settings.tick_interval.as_millis() as u64,
            estimated_minutes: settings.estimated_minutes,
            courier_name: settings.courier_name,
            courier_vehicle: settings.courier_vehicle,
            order_id_prefix: "#AZ-".to_string(),
            profile: ProfileConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from file and environment.
    pub fn load(path: Option<&str>) -> Result<Self, SystemError> {
        use ::config::{Config as ConfigLib, Environment, File};

        let mut builder =
            ConfigLib::builder().add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::with_name(config_path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The values stamped onto every placed order.
    pub fn order_settings(&self) -> OrderSettings {
        OrderSettings {
            courier_name: self.courier_name.clone(),
            courier_vehicle: self.courier_vehicle.clone(),
            estimated_minutes: self.estimated_minutes,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }

    pub fn profile(&self) -> UserProfile {
        self.profile.clone().into()
    }
}

/// The signed-in user, until a real account service exists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
    pub points: u32,
    pub is_verified: bool,
    pub profile_pic_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Elmir Aliyev".to_string(),
            email: "elmir@pharmacyon.az".to_string(),
            points: 150,
            is_verified: true,
            profile_pic_url: String::new(),
        }
    }
}

impl From<ProfileConfig> for UserProfile {
    fn from(profile: ProfileConfig) -> Self {
        UserProfile {
            name: profile.name,
            email: profile.email,
            points: profile.points,
            is_verified: profile.is_verified,
            profile_pic_url: profile.profile_pic_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // `load` reads the process env and working directory; tests calling it take turns.
    static LOAD_LOCK: Mutex<()> = Mutex::new(());

    fn serialize_loads() -> MutexGuard<'static, ()> {
        LOAD_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.order_id_prefix, "#AZ-");

        let settings = config.order_settings();
        assert_eq!(settings, OrderSettings::default());
        assert_eq!(settings.tick_interval, Duration::from_millis(900));

        let user = config.profile();
        assert_eq!(user.name, "Elmir Aliyev");
        assert_eq!(user.points, 150);
        assert!(user.is_verified);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let _guard = serialize_loads();
        let path = write_config(
            "storefront-partial.toml",
            r#"
tick_interval_ms = 50
courier_name = "Rashad"

[profile]
name = "Leyla"
"#,
        );

        let config = StoreConfig::load(path.to_str()).unwrap();
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.courier_name, "Rashad");
        assert_eq!(config.courier_vehicle, "Motorcycle");
        assert_eq!(config.profile.name, "Leyla");
        assert_eq!(config.profile.email, "elmir@pharmacyon.az");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let _guard = serialize_loads();
        let missing = std::env::temp_dir().join("storefront-does-not-exist.yaml");
        let result = StoreConfig::load(missing.to_str());
        assert!(matches!(result, Err(SystemError::Config(_))));
    }

    #[test]
    fn test_env_overrides_working_directory_file() {
        let _guard = serialize_loads();

        let dir = std::env::temp_dir().join(format!("storefront-cwd-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("storefront.yaml"),
            "tick_interval_ms: 50\ncourier_vehicle: Bicycle\nprofile:\n  name: Leyla\n  points: 20\n",
        )
        .unwrap();

        let previous_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&dir).unwrap();

        // The working-directory file alone
        let from_file = StoreConfig::load(None);

        std::env::set_var("STOREFRONT__TICK_INTERVAL_MS", "250");
        std::env::set_var("STOREFRONT__PROFILE__NAME", "Nigar");
        let with_env = StoreConfig::load(None);
        std::env::remove_var("STOREFRONT__TICK_INTERVAL_MS");
        std::env::remove_var("STOREFRONT__PROFILE__NAME");

        std::env::set_current_dir(previous_dir).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        let from_file = from_file.unwrap();
        assert_eq!(from_file.tick_interval_ms, 50);
        assert_eq!(from_file.courier_vehicle, "Bicycle");
        assert_eq!(from_file.profile.name, "Leyla");

        let with_env = with_env.unwrap();
        assert_eq!(with_env.tick_interval_ms, 250);
        assert_eq!(with_env.order_settings().tick_interval, Duration::from_millis(250));
        assert_eq!(with_env.profile.name, "Nigar");
        // Keys the env leaves alone come from the file, then the defaults
        assert_eq!(with_env.courier_vehicle, "Bicycle");
        assert_eq!(with_env.profile.points, 20);
        assert_eq!(with_env.profile.email, "elmir@pharmacyon.az");
        assert_eq!(with_env.buffer_size, 32);
    }
}
