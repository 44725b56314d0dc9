//! Error types for configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration resolution.
///
/// Resolution either fully succeeds or fails with one of these variants;
/// there is no partial-success mode. Malformed CLI tokens and string values
/// that resist coercion are deliberately *not* errors; they degrade to
/// skipped tokens or plain strings instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the constants file that defines the deny-list.
    ///
    /// Without the deny-list the environment layer cannot be built, so this
    /// is fatal for the whole resolution.
    #[error("Failed to read constants file '{}': {source}", path.display())]
    ConstantsRead {
        /// Path to the constants file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the constants file as TOML.
    #[error("Failed to parse constants file '{}': {source}", path.display())]
    ConstantsParse {
        /// Path to the constants file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Failed to read a configuration file that exists.
    ///
    /// A config path that points at no file at all is not an error; the
    /// file layer is simply empty in that case.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an existing configuration file as TOML.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    FileParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The merged configuration mapping was rejected by the target schema.
    ///
    /// Carries the deserializer's own message (incompatible type, missing
    /// required field, rejected extra) verbatim.
    #[error("Merged configuration does not match the schema: {source}")]
    Schema {
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
