//! Configuration for the demonstration routine.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables prefixed with [`ENV_PREFIX`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Deserializer, Serialize};

/// Prefix of environment variables that override demo settings
/// (e.g. `CALCULATOR_NAME=Bob`).
pub const ENV_PREFIX: &str = "CALCULATOR_";

/// Configuration error for demo config loading
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("invalid calculator config: {source}")]
    Invalid {
        #[source]
        source: Box<figment::Error>,
    },
}

/// Sample inputs used by the demonstration routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Left operand for the arithmetic operations.
    #[serde(default = "default_a")]
    pub a: i32,
    /// Right operand; also the divisor.
    #[serde(default = "default_b")]
    pub b: i32,
    /// Index passed to `fibonacci`.
    #[serde(default = "default_fibonacci_index")]
    pub fibonacci_index: i32,
    /// Name passed to `greet`.
    #[serde(default = "default_name", deserialize_with = "deserialize_name")]
    pub name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            a: default_a(),
            b: default_b(),
            fibonacci_index: default_fibonacci_index(),
            name: default_name(),
        }
    }
}

impl DemoConfig {
    /// Load the layered configuration.
    ///
    /// The YAML file is optional, but when a path is given it must exist.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingFile` if `path` does not point to a file and
    /// `ConfigError::Invalid` if any layer fails to deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Invalid {
                source: Box::new(e),
            })?;

        tracing::debug!(
            a = config.a,
            b = config.b,
            fibonacci_index = config.fibonacci_index,
            name = %config.name,
            "demo config loaded"
        );
        Ok(config)
    }
}

/// Scalar accepted for `name`; env and YAML values that look numeric arrive as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NameScalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NameScalar::deserialize(deserializer)? {
        NameScalar::Text(text) => text,
        NameScalar::Signed(value) => value.to_string(),
        NameScalar::Unsigned(value) => value.to_string(),
        NameScalar::Float(value) => value.to_string(),
        NameScalar::Bool(value) => value.to_string(),
    })
}

fn default_a() -> i32 {
    10
}

fn default_b() -> i32 {
    5
}

fn default_fibonacci_index() -> i32 {
    10
}

fn default_name() -> String {
    "World".to_owned()
}
