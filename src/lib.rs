//! Stratum: a layered configuration resolver.
//!
//! Produces a single validated configuration object by merging values from
//! multiple sources of differing precedence into one structured result,
//! bound against a caller-supplied serde schema.
//!
//! This crate provides:
//! - Value coercion for raw string inputs ([`coerce`])
//! - Key-path addressing of nested fields from flat keys ([`split_key`], [`write_path`])
//! - Source adapters for a TOML config file, CLI arguments, and environment variables
//! - Deep merging of the source layers ([`deep_merge`], [`deep_merge_all`])
//! - The resolution entry point ([`Resolver`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Environment variables** - `SECTION__SUBSECTION__FIELD=value`, names
//!    lower-cased on read, double underscore as the nesting separator
//! 2. **CLI arguments** - `--segment-segment.segment value` or a bare
//!    `--flag` for boolean true
//! 3. **TOML config file** - optional; nested via the document's own tables
//! 4. **Schema defaults** - whatever the target type's serde defaults declare
//!
//! The flag `--database-max-connections 50` and the variable
//! `DATABASE__MAX__CONNECTIONS=50` address the same nested field.
//!
//! # Coercion
//!
//! CLI and environment values arrive as strings and are coerced to the most
//! specific scalar they parse as: boolean (case-insensitive `true`/`false`),
//! integer, float, or the original string. Config-file values are already
//! typed by TOML and pass through verbatim.
//!
//! # Deny-list
//!
//! Shell and runtime housekeeping variables are excluded from the
//! environment layer by a deny-list of exact names and prefixes, loaded per
//! resolution call from a constants file (`const.toml` by default).
//!
//! # One-shot resolution
//!
//! Resolution is a single synchronous call with no caching and no reloading:
//! it reads at most two files, scans the argument list and the environment
//! snapshot once, and returns. The live environment is never mutated.

mod cli;
mod coerce;
mod constants;
mod env;
mod error;
mod file;
mod merge;
mod path;
mod resolver;

#[cfg(test)]
mod path_tests;
#[cfg(test)]
mod resolver_tests;

pub use coerce::coerce;
pub use constants::{CONSTANTS_PATH, DenyList};
pub use env::{EnvSource, MockEnv, StdEnv};
pub use error::ConfigError;
pub use merge::{deep_merge, deep_merge_all};
pub use path::{split_key, write_path};
pub use resolver::Resolver;
