//! Resolution entry point.
//!
//! Builds the three source layers, merges them in precedence order, and
//! hands the merged mapping to the schema for final construction and
//! type-checking. One synchronous call: two file reads at most, one pass
//! over the argument tokens, one pass over the environment snapshot. Every
//! layer is constructed fresh per call and discarded after merging.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::constants::{CONSTANTS_PATH, DenyList};
use crate::env::{EnvSource, StdEnv};
use crate::error::ConfigError;
use crate::{cli, env, file, merge};

/// Layered configuration resolver.
///
/// Merges an optional TOML config file, CLI arguments, and environment
/// variables into one mapping and binds it to a target type. Precedence,
/// highest to lowest: environment, CLI, config file, then the schema's own
/// defaults for anything no layer set.
///
/// # Construction
///
/// `Resolver::new()` reads the live process environment and looks for the
/// constants file at its default relative location; both can be overridden
/// for tests or embedding.
pub struct Resolver {
    config_file: Option<PathBuf>,
    args: Vec<String>,
    constants_path: PathBuf,
    env: Box<dyn EnvSource>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Creates a resolver with no config file, no CLI arguments, the
    /// default constants location, and the live process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_file: None,
            args: Vec::new(),
            constants_path: PathBuf::from(CONSTANTS_PATH),
            env: Box::new(StdEnv),
        }
    }

    /// Sets the optional configuration file path.
    #[must_use]
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Sets the CLI argument list to tokenize.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the constants file location that defines the deny-list.
    #[must_use]
    pub fn constants_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.constants_path = path.into();
        self
    }

    /// Replaces the environment snapshot source.
    #[must_use]
    pub fn env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env = Box::new(source);
        self
    }

    /// Builds and merges the three source layers.
    ///
    /// Precedence is fixed: the config-file layer first, the CLI layer
    /// merged on top, the environment layer on top of that.
    ///
    /// # Errors
    ///
    /// Returns an error if the constants file cannot be loaded or an
    /// existing config file fails to read or parse.
    pub fn merged(&self) -> Result<Map<String, Value>, ConfigError> {
        let deny = DenyList::load(&self.constants_path)?;

        let file_layer = file::load(self.config_file.as_deref())?;
        let cli_layer = cli::collect(self.args.iter().cloned());
        let env_layer = env::collect(self.env.as_ref(), &deny);

        tracing::debug!(
            file_keys = file_layer.len(),
            cli_keys = cli_layer.len(),
            env_keys = env_layer.len(),
            "collected configuration layers"
        );

        Ok(merge::deep_merge_all([file_layer, cli_layer, env_layer]))
    }

    /// Resolves the merged mapping into a validated configuration object.
    ///
    /// Fields absent from all three layers take the schema's declared
    /// defaults; the schema also performs final type-checking.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer fails to load (see [`Self::merged`]) or
    /// the merged mapping is rejected by the schema.
    pub fn resolve<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let merged = self.merged()?;

        serde_json::from_value(Value::Object(merged))
            .map_err(|source| ConfigError::Schema { source })
    }
}
