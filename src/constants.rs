//! Deny-list constants source.
//!
//! The environment adapter must ignore shell and runtime housekeeping
//! variables (`PATH`, `LC_*`, ...). Which ones is not hardcoded: a
//! constants file at a fixed relative location carries a `read_only_envs`
//! section with the exact names and name prefixes to skip. The file is read
//! fresh on every resolution call rather than cached process-wide, so
//! repeated calls from different working directories never see a stale
//! deny-list.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default relative location of the constants file.
pub const CONSTANTS_PATH: &str = "const.toml";

/// Top-level structure of the constants file.
///
/// Only the `read_only_envs` section is interpreted here; the file may
/// carry unrelated sections for other tools.
#[derive(Debug, Default, Deserialize)]
struct ConstantsFile {
    #[serde(default)]
    read_only_envs: DenyList,
}

/// Environment variables excluded from configuration before key derivation.
#[derive(Debug, Default, Deserialize)]
pub struct DenyList {
    /// Exact variable names to always ignore
    #[serde(default)]
    pub skip_env_vars: HashSet<String>,

    /// Variable name prefixes to always ignore
    #[serde(default)]
    pub skip_prefixes: Vec<String>,
}

impl DenyList {
    /// Loads the deny-list from a constants file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Both are
    /// fatal: without the deny-list the environment layer cannot be built.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConstantsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let constants: ConstantsFile =
            toml::from_str(&content).map_err(|e| ConfigError::ConstantsParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(constants.read_only_envs)
    }

    /// Returns true if a variable name matches an exact entry or prefix.
    #[must_use]
    pub fn is_denied(&self, name: &str) -> bool {
        self.skip_env_vars.contains(name)
            || self
                .skip_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }
}
