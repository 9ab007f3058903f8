use crate::application_impl::DEFAULT_USERNAME_FIELD;
use crate::domain_model::ClassDescriptor;
use anyhow::{Result, anyhow};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
    pub store: Store,
    pub provider: Provider,
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub backend: String, // "memory" or "mysql"
    /// JSON array of objects seeding the memory backend.
    pub fixtures: Option<String>,
    pub dsn: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Provider {
    pub class: String,
    #[serde(default = "default_username_field")]
    pub username_field: String,
}

fn default_username_field() -> String {
    DEFAULT_USERNAME_FIELD.to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Environment overrides, e.g. `USERDIR__STORE__DSN`.
const ENV_PREFIX: &str = "USERDIR";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);
    build(Config::builder().add_source(File::with_name(path)))
}

pub fn parse_settings_str(toml: &str) -> Result<Settings> {
    build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let settings: Settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[log]
filter = "debug"

[store]
backend = "memory"
fixtures = "settings/users.json"

[provider]
class = 'App\User'

[[classes]]
name = 'App\User'
parent = "DataObject"
fields = ["username", "email"]

[[classes]]
name = 'App\Asset'
"#;

    #[test]
    fn parses_provider_and_classes() {
        let settings = parse_settings_str(SAMPLE).unwrap();
        assert_eq!(settings.log.filter, "debug");
        assert_eq!(settings.store.backend, "memory");
        assert_eq!(settings.store.fixtures.as_deref(), Some("settings/users.json"));
        assert!(settings.store.dsn.is_none());
        assert_eq!(settings.provider.class, "App\\User");
        assert_eq!(settings.provider.username_field, "username");

        assert_eq!(settings.classes.len(), 2);
        assert_eq!(settings.classes[0].parent.as_ref().map(|p| p.as_str()), Some("DataObject"));
        assert_eq!(settings.classes[0].fields, vec!["username", "email"]);
        assert!(settings.classes[1].parent.is_none());
        assert!(settings.classes[1].fields.is_empty());
    }

    #[test]
    fn missing_provider_section_is_an_error() {
        let toml = "[log]\nfilter = \"info\"\n[store]\nbackend = \"memory\"\n";
        assert!(parse_settings_str(toml).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_settings(Some("settings/does-not-exist")).is_err());
    }
}
