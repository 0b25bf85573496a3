// src/config.rs
//! Registry configuration.
//!
//! Defaults are strict: empty names are refused. Hosts that need the literal
//! reading of the `[^a-z_]` rejection rule (where `""` contains no illegal
//! character) can opt in with [`EmptyNamePolicy::Allow`].

use tracing::warn;

/// Environment variable toggling [`EmptyNamePolicy::Allow`] (`1`/`true`/`yes`).
pub const ENV_ALLOW_EMPTY: &str = "TESSERA_ALLOW_EMPTY_NAMES";
/// Environment variable overriding the initial table capacity.
pub const ENV_CAPACITY: &str = "TESSERA_REGISTRY_CAPACITY";

const DEFAULT_CAPACITY: usize = 16;

/// How the registry treats the empty string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyNamePolicy {
    #[default]
    Reject,
    Allow,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    pub empty_names: EmptyNamePolicy,
    /// Initial capacity of the name table.
    pub capacity: usize,
    /// Number of dashmap shards. Must be a power of two greater than one;
    /// `None` keeps dashmap's default.
    pub shard_amount: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            empty_names: EmptyNamePolicy::Reject,
            capacity: DEFAULT_CAPACITY,
            shard_amount: None,
        }
    }
}

impl RegistryConfig {
    pub fn with_empty_names(mut self, policy: EmptyNamePolicy) -> Self {
        self.empty_names = policy;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the shard count. Values that are not a power of two greater than
    /// one are ignored so the table can always be built.
    pub fn with_shard_amount(mut self, shards: usize) -> Self {
        if shards > 1 && shards.is_power_of_two() {
            self.shard_amount = Some(shards);
        } else {
            warn!(shards, "ignoring shard amount, must be a power of two > 1");
        }
        self
    }

    /// Build a config from the process environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_ALLOW_EMPTY) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => cfg.empty_names = EmptyNamePolicy::Allow,
                "0" | "false" | "no" | "" => cfg.empty_names = EmptyNamePolicy::Reject,
                other => warn!(var = ENV_ALLOW_EMPTY, value = other, "unrecognised value, keeping default"),
            }
        }

        if let Some(raw) = lookup(ENV_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(n) => cfg.capacity = n,
                Err(e) => warn!(var = ENV_CAPACITY, value = %raw, error = %e, "invalid capacity, keeping default"),
            }
        }

        cfg
    }
}
