// src/registry.rs
//! Token Registry
//! Interns validated names into shared [`Token`] handles. Each distinct name
//! maps to exactly one token for the lifetime of the registry.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::name::NameRule;
use crate::token::Token;

pub struct TokenRegistry {
    /// Mapping of names to their interned tokens. Entries are never removed.
    tokens: DashMap<String, Token>,
    rule: NameRule,
}

impl TokenRegistry {
    /// Create a new, empty registry with the default (strict) configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry using `config` for sizing and the empty-name policy.
    pub fn with_config(config: RegistryConfig) -> Self {
        let tokens = match config.shard_amount {
            Some(shards) if shards > 1 && shards.is_power_of_two() => {
                DashMap::with_capacity_and_shard_amount(config.capacity, shards)
            }
            _ => DashMap::with_capacity(config.capacity),
        };
        Self {
            tokens,
            rule: NameRule::new(config.empty_names),
        }
    }

    /// The name rule this registry validates against.
    pub fn rule(&self) -> NameRule {
        self.rule
    }

    /// Return the token for `name`, creating it on first use.
    ///
    /// Concurrent first calls for the same name race on an insert-if-absent
    /// entry; one token wins and every caller gets that one. Invalid names
    /// leave the table untouched.
    pub fn get_or_create(&self, name: &str) -> Result<Token> {
        // Only validated names are ever stored, so a hit needs no re-check.
        if let Some(existing) = self.tokens.get(name) {
            trace!(name, "token lookup hit");
            return Ok(existing.value().clone());
        }

        if let Err(e) = self.validate(name) {
            warn!(name, error = %e, "rejected token name");
            return Err(e);
        }

        let token = self
            .tokens
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(name, "registered token");
                Token::new(name)
            })
            .value()
            .clone();
        Ok(token)
    }

    /// Look up a token without creating it.
    pub fn get(&self, name: &str) -> Option<Token> {
        self.tokens.get(name).map(|t| t.value().clone())
    }

    /// True if `name` has already been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Run the configured name rule without touching the table.
    pub fn validate(&self, name: &str) -> Result<()> {
        self.rule.check(name)
    }

    /// Number of distinct names registered.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if no token has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Sorted snapshot of the registered names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tokens.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }

    /// Sorted snapshot of the registered tokens.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.tokens.iter().map(|e| e.value().clone()).collect();
        tokens.sort_unstable();
        tokens
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRegistry")
            .field("len", &self.tokens.len())
            .field("rule", &self.rule)
            .finish()
    }
}

// process-wide instance, lives until exit
static GLOBAL: OnceCell<TokenRegistry> = OnceCell::new();

/// The process-wide registry.
///
/// Built from [`RegistryConfig::from_env`] on first access unless
/// [`install_global`] ran earlier. Prefer passing a `&TokenRegistry` around;
/// this exists for callers that need tokens with process lifetime.
pub fn global() -> &'static TokenRegistry {
    GLOBAL.get_or_init(|| {
        debug!("initialising global token registry from environment");
        TokenRegistry::with_config(RegistryConfig::from_env())
    })
}

/// Install the process-wide registry explicitly at startup.
/// Returns false if it was already initialised; the existing one is kept.
pub fn install_global(config: RegistryConfig) -> bool {
    let installed = GLOBAL.set(TokenRegistry::with_config(config)).is_ok();
    if !installed {
        warn!("global token registry already initialised, ignoring new config");
    }
    installed
}
