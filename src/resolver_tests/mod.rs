//! Tests for end-to-end resolution.

use std::path::PathBuf;

use serde::Deserialize;
use tempfile::TempDir;

use super::env::MockEnv;
use super::resolver::Resolver;

/// Deny-list used by every resolution test.
const CONSTANTS: &str = r#"
[read_only_envs]
skip_env_vars = ["PATH", "HOME", "SHELL", "USER", "LANG", "TZ", "TERM", "PWD"]
skip_prefixes = ["LC_", "XDG_", "SSH_", "CARGO_", "RUSTUP_"]
"#;

/// Schema under test: a small service configuration with nested sections
/// and a default for every field.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct AppConfig {
    port: u16,
    host: String,
    database: DatabaseConfig,
    cache: CacheConfig,
    api: ApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "localhost".to_string(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct DatabaseConfig {
    url: String,
    port: u16,
    max: MaxSection,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/mydb".to_string(),
            port: 5432,
            max: MaxSection::default(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct MaxSection {
    connections: u32,
}

impl Default for MaxSection {
    fn default() -> Self {
        Self { connections: 100 }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct CacheConfig {
    enabled: bool,
    ttl: u64,
    redis: RedisConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: 3600,
            redis: RedisConfig::default(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct RedisConfig {
    host: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct ApiConfig {
    timeout: u64,
    rate: RateSection,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            rate: RateSection::default(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
struct RateSection {
    limit: u32,
}

impl Default for RateSection {
    fn default() -> Self {
        Self { limit: 100 }
    }
}

/// Temp-dir fixture holding the constants file and optional config file.
struct Fixture {
    dir: TempDir,
    constants: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let constants = dir.path().join("const.toml");
        std::fs::write(&constants, CONSTANTS).unwrap();
        Self { dir, constants }
    }

    fn config_file(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    /// A resolver with the fixture's constants and an empty environment.
    /// Tests never read the live process environment.
    fn resolver(&self) -> Resolver {
        Resolver::new()
            .constants_path(&self.constants)
            .env_source(MockEnv::new())
    }
}

fn env(pairs: &[(&str, &str)]) -> MockEnv {
    MockEnv::from_pairs(pairs.iter().copied())
}
